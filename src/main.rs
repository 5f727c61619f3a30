use std::sync::Arc;

use clap::Parser;

use bookdex::{
    cli::{self, Commands},
    handlers::{Consts, Ctx},
    http, init,
    searchbox::{Outcome, SearchBox},
};

#[tokio::main]
async fn main() {
    init::init_logger();

    let cli = cli::Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve);

    // Generate a new config file.
    if let Commands::NewConfig { path } = &command {
        match init::generate_config(path) {
            Ok(_) => {
                log::info!("config file generated: {}", path.display());
            }
            Err(e) => {
                log::error!("error generating config: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // Load config.
    let mut config = init::init_config(&cli.config).unwrap_or_else(|e| {
        log::error!("{}", e);
        std::process::exit(1);
    });
    if let Some(path) = &cli.catalog {
        config.catalog.path = path.to_string_lossy().to_string();
    }

    // Load the catalog. The index is complete before anything queries it.
    let index = match init::init_index(&config.catalog.path) {
        Ok(idx) => idx,
        Err(e) => {
            log::error!("error loading catalog: {}", e);
            std::process::exit(1);
        }
    };

    let app = &config.app;
    match command {
        Commands::Suggest { text, limit } => {
            let sb = SearchBox::new(
                &index,
                limit.unwrap_or(app.num_suggestions),
                app.max_results,
            );
            for s in sb.on_text_changed(&text) {
                println!("{}", s);
            }
        }

        Commands::Search { text, limit } => {
            let sb = SearchBox::new(
                &index,
                app.num_suggestions,
                limit.unwrap_or(app.max_results),
            );
            let outcome = sb.on_query_submitted(&text);
            match &outcome {
                Outcome::Idle => {
                    log::error!("query is required");
                    std::process::exit(1);
                }
                Outcome::NoResults { query } => println!("No results found for '{}'", query),
                Outcome::Found { .. } => {
                    for b in outcome.books() {
                        println!("{}\t{}", b.id(), b);
                    }
                }
            }
        }

        Commands::Book { id } => match index.get_by_id(&id) {
            Some(b) => {
                println!("id:     {}", b.id());
                println!("title:  {}", b.title());
                println!("author: {}", b.author());
                println!("tags:   {}", b.tags().join(", "));
            }
            None => {
                log::error!("book '{}' not found", id);
                std::process::exit(1);
            }
        },

        Commands::Serve => {
            let ctx = Arc::new(Ctx {
                index: Arc::new(index),
                consts: Consts {
                    num_suggestions: app.num_suggestions,
                    max_suggestions: app.max_suggestions,
                    max_results: app.max_results,
                },
            });

            if let Err(e) = http::serve(ctx, &app.address).await {
                log::error!("server error on {}: {}", app.address, e);
                std::process::exit(1);
            }
        }

        // Handled before loading the config.
        Commands::NewConfig { .. } => {}
    }
}
