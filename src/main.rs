//! Terminal front end for the account list, backed by a JSON seed file.

use std::env;
use std::io::{self, BufRead, Write};
use std::time::Instant;

use config::Config;
use dotenvy::dotenv;

use accounts_list_view::dto::list_view::ListViewPageData;
use accounts_list_view::list_view::ListView;
use accounts_list_view::models::config::ListViewConfig;
use accounts_list_view::pagination::PaginatorEvent;
use accounts_list_view::repository::InMemoryAccountRepository;
use accounts_list_view::services::LogNotifier;
use accounts_list_view::services::list_view::ListViewSession;

const HELP: &str = "\
commands:
  next | prev | first | last     navigate
  page <n>                       go to page n
  click <i>                      click the i-th button of the page strip
  size <n>                       items per page
  type <value|all>               filter by type
  industry <value|all>           filter by industry
  search <text>                  search by name (empty text clears)
  json                           dump the current render model
  help | quit";

fn print_page(data: &ListViewPageData) {
    for row in &data.rows {
        let account = &row.account;
        println!(
            "  {:<36} {:<18} {:<22} {:<16} {}",
            account.name.as_str(),
            account.phone.as_deref().unwrap_or("-"),
            account.account_type.as_deref().unwrap_or("-"),
            account.industry.as_deref().unwrap_or("-"),
            row.record_url
        );
    }
    if data.show_no_data {
        println!("  No accounts found.");
    }

    let strip: Vec<String> = data
        .paginator
        .buttons
        .iter()
        .map(|button| {
            if button.is_current {
                format!("[{}]", button.label)
            } else {
                button.label.clone()
            }
        })
        .collect();
    println!("  {}", strip.join(" "));
    println!("  {}", data.paginator.page_counter_info);

    if let Some(message) = &data.search_validation {
        println!("  search: {message}");
    }
}

fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default").required(false))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP").try_parsing(true))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let list_config = match settings.try_deserialize::<ListViewConfig>() {
        Ok(list_config) => list_config,
        Err(err) => {
            log::error!("Error loading list view config: {err}");
            std::process::exit(1);
        }
    };

    let repo = InMemoryAccountRepository::from_path(&list_config.seed_path).map_err(|e| {
        io::Error::other(format!(
            "Failed to load accounts from {}: {e}",
            list_config.seed_path
        ))
    })?;

    let mut session = ListViewSession::mount(
        ListView::new(list_config.options()),
        repo,
        LogNotifier,
    );

    println!("{HELP}");
    print_page(&session.render());

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, argument) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "next" => session.paginator_event(PaginatorEvent::Next),
            "prev" => session.paginator_event(PaginatorEvent::Previous),
            "first" => session.paginator_event(PaginatorEvent::GoToFirst),
            "last" => session.paginator_event(PaginatorEvent::GoToLast),
            "page" => match argument.trim().parse() {
                Ok(page_number) => {
                    session.paginator_event(PaginatorEvent::GoToPage { page_number })
                }
                Err(_) => println!("page expects a number"),
            },
            "click" => match argument.trim().parse() {
                Ok(index) => session.click_page_button(index),
                Err(_) => println!("click expects a button index"),
            },
            "size" => session.paginator_event(PaginatorEvent::ItemsOnPageChanged {
                value: argument.to_string(),
            }),
            "type" => session.change_type(&filter_value(argument)),
            "industry" => session.change_industry(&filter_value(argument)),
            "search" => {
                session.search(argument, Instant::now());
                if let Some(deadline) = session.next_deadline() {
                    std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
                }
                session.tick(Instant::now());
            }
            "json" => {
                let json = serde_json::to_string_pretty(&session.render())
                    .map_err(io::Error::other)?;
                println!("{json}");
                continue;
            }
            "help" => {
                println!("{HELP}");
                continue;
            }
            "quit" | "exit" => break,
            "" => continue,
            other => {
                println!("unknown command: {other}");
                continue;
            }
        }

        print_page(&session.render());
    }

    session.teardown();
    Ok(())
}

/// `all` selects the synthetic option that clears the filter.
fn filter_value(argument: &str) -> String {
    let argument = argument.trim();
    if argument.eq_ignore_ascii_case("all") {
        accounts_list_view::domain::metadata::ALL_VALUE.to_string()
    } else {
        argument.to_string()
    }
}
