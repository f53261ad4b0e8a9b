//! Command-line shim over the ForkTales core.
//!
//! This binary is the thin integration layer standing in for the excluded
//! screen layer: it wires configuration into the container, triggers one
//! view-model operation per subcommand, and renders the resulting concern
//! state as text or JSON. All behavior lives in the library.
//!
//! # Usage
//!
//! ```text
//! forktales [--config <file>] [--json] <command> [args]
//!
//! Commands:
//!   categories                 List recipe categories
//!   recipes <category>...      List recipes for the given categories
//!   details <id>               Show full details of one recipe
//!   random                     Show one random recipe
//!   search <query>             Search recipes by name
//!   favorites                  List locally saved favorites
//!   favorite add <id>          Save a recipe as favorite
//!   favorite rm <id>           Remove a recipe from favorites
//!   login <username> <password>  Check a credential pair
//! ```
//!
//! Without `--config`, settings are taken from the `FORKTALES_BASE_URL`,
//! `FORKTALES_API_KEY`, `FORKTALES_DB`, and `FORKTALES_TRACE` environment
//! variables, falling back to defaults.

use std::collections::BTreeMap;
use std::path::Path;

use forktales::app::{FavoritesState, RecipeDetailsState, RecipeListState, SearchState};
use forktales::{initialize, Config, Recipe, RecipeDetails};

/// Message shown whenever a concern lands in its error state.
const GENERIC_ERROR: &str = "Error: Something went wrong!";

fn usage() -> ! {
    eprintln!(
        "usage: forktales [--config <file>] [--json] <command> [args]\n\
         commands: categories | recipes <category>... | details <id> | random |\n\
         \x20         search <query> | favorites | favorite add|rm <id> | login <user> <pass>"
    );
    std::process::exit(2);
}

fn fail() -> ! {
    eprintln!("{GENERIC_ERROR}");
    std::process::exit(1);
}

fn load_config(config_path: Option<&str>) -> forktales::Result<Config> {
    match config_path {
        Some(path) => Config::from_file(Path::new(path)),
        None => {
            let mut map = BTreeMap::new();
            let vars = [
                ("base_url", "FORKTALES_BASE_URL"),
                ("api_key", "FORKTALES_API_KEY"),
                ("db_path", "FORKTALES_DB"),
                ("trace_level", "FORKTALES_TRACE"),
            ];
            for (key, var) in vars {
                if let Ok(value) = std::env::var(var) {
                    map.insert(key.to_string(), value);
                }
            }
            Ok(Config::from_map(&map))
        }
    }
}

fn print_recipes(recipes: &[Recipe], json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(recipes).unwrap_or_default());
        return;
    }
    for recipe in recipes {
        println!("{}  {}  [{}]", recipe.id, recipe.name, recipe.category);
    }
}

fn print_details(details: &RecipeDetails, is_favorite: bool, json: bool) {
    if json {
        println!("{}", serde_json::to_string_pretty(details).unwrap_or_default());
        return;
    }
    println!("{} — {} ({})", details.id, details.name, details.category);
    if !details.area.is_empty() {
        println!("cuisine: {}", details.area);
    }
    if !details.tags.is_empty() {
        println!("tags: {}", details.tags.join(", "));
    }
    for ingredient in &details.ingredients {
        println!("  - {} ({})", ingredient.name, ingredient.measure);
    }
    println!("\n{}", details.instructions);
    if let Some(youtube) = &details.youtube {
        println!("\nvideo: {youtube}");
    }
    println!("\nfavorite: {}", if is_favorite { "yes" } else { "no" });
}

#[tokio::main]
async fn main() {
    let mut args = std::env::args().skip(1).peekable();

    let mut config_path = None;
    let mut json = false;
    while let Some(arg) = args.peek() {
        match arg.as_str() {
            "--config" => {
                args.next();
                config_path = args.next();
            }
            "--json" => {
                args.next();
                json = true;
            }
            _ => break,
        }
    }

    let config = match load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let container = match initialize(&config) {
        Ok(container) => container,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let command = args.next().unwrap_or_else(|| usage());
    let rest: Vec<String> = args.collect();
    let viewmodel = container.viewmodel();

    match command.as_str() {
        "categories" => {
            viewmodel.refresh_categories().await;
            let categories = viewmodel.categories();
            if categories.is_empty() {
                fail();
            }
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&categories).unwrap_or_default()
                );
            } else {
                for category in categories {
                    println!("{}", category.name);
                }
            }
        }
        "recipes" => {
            if rest.is_empty() {
                usage();
            }
            viewmodel.fetch_recipes_by_categories(&rest).await;
            match viewmodel.recipe_list_state() {
                RecipeListState::Success(recipes) => print_recipes(&recipes, json),
                RecipeListState::Loading | RecipeListState::Error => fail(),
            }
        }
        "details" => {
            let id = rest.first().unwrap_or_else(|| usage());
            viewmodel.fetch_details_by_id(id).await;
            match viewmodel.recipe_details_state() {
                RecipeDetailsState::Success {
                    details,
                    is_favorite,
                } => print_details(&details, is_favorite, json),
                RecipeDetailsState::Loading | RecipeDetailsState::Error => fail(),
            }
        }
        "random" => {
            viewmodel.fetch_random_details().await;
            match viewmodel.recipe_details_state() {
                RecipeDetailsState::Success {
                    details,
                    is_favorite,
                } => print_details(&details, is_favorite, json),
                RecipeDetailsState::Loading | RecipeDetailsState::Error => fail(),
            }
        }
        "search" => {
            let query = rest.join(" ");
            viewmodel.search(&query).await;
            match viewmodel.search_state() {
                SearchState::Empty => println!("(no query)"),
                SearchState::Success(results) if results.is_empty() => println!("(no results)"),
                SearchState::Success(results) => {
                    let summaries: Vec<Recipe> =
                        results.iter().map(RecipeDetails::summary).collect();
                    print_recipes(&summaries, json);
                }
                SearchState::Loading | SearchState::Error => fail(),
            }
        }
        "favorites" => {
            viewmodel.refresh_favorites().await;
            match viewmodel.favorites_state() {
                FavoritesState::Success(recipes) => print_recipes(&recipes, json),
                FavoritesState::Loading | FavoritesState::Error => fail(),
            }
        }
        "favorite" => {
            let (action, id) = match (rest.first(), rest.get(1)) {
                (Some(action), Some(id)) => (action.as_str(), id.as_str()),
                _ => usage(),
            };
            viewmodel.fetch_details_by_id(id).await;
            let details = match viewmodel.recipe_details_state() {
                RecipeDetailsState::Success { details, .. } => details,
                RecipeDetailsState::Loading | RecipeDetailsState::Error => fail(),
            };
            match action {
                "add" => viewmodel.save_favorite(&details).await,
                "rm" => viewmodel.remove_favorite(&details).await,
                _ => usage(),
            }
            match viewmodel.recipe_details_state() {
                RecipeDetailsState::Success { is_favorite, .. } => {
                    println!("{} favorite: {}", id, if is_favorite { "yes" } else { "no" });
                }
                RecipeDetailsState::Loading | RecipeDetailsState::Error => fail(),
            }
        }
        "login" => {
            let (username, password) = match (rest.first(), rest.get(1)) {
                (Some(username), Some(password)) => (username, password),
                _ => usage(),
            };
            let login = container.login();
            login.set_username(username.clone());
            login.set_password(password.clone());
            login.submit();
            if login.state().logged_in {
                println!("logged in");
            } else {
                println!("wrong credentials");
                std::process::exit(1);
            }
        }
        _ => usage(),
    }
}
