use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use std::{env, process};
use template_editor_config::Config;
use template_editor_engine::editing::parse_script;
use template_editor_engine::{
    EditorSession, ItalicDelimiter, SerializeOptions, SessionOptions, normalize_whitespace, parse,
    serialize_with,
};

const USAGE: &str = "<normalize|check> <file> | replay <file> <keys>";

fn session_options(config: &Config) -> Result<SessionOptions> {
    let italic = ItalicDelimiter::from_token(&config.italic_delimiter)
        .ok_or_else(|| anyhow!("unsupported italic delimiter {:?}", config.italic_delimiter))?;
    Ok(SessionOptions {
        serialize: SerializeOptions { italic },
        autoformat: config.autoformat,
        unescape_notifications: config.unescape_notifications,
    })
}

fn load_config() -> Config {
    match Config::load() {
        Ok(Some(config)) => {
            debug!("using config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("template-editor-cli", String::as_str);
    let (command, file) = match args.as_slice() {
        [_, command, file, ..] => (command.as_str(), file.as_str()),
        _ => {
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    };

    let options = session_options(&load_config())?;
    let source =
        std::fs::read_to_string(file).with_context(|| format!("Failed to read '{file}'"))?;

    match command {
        "normalize" => {
            print!("{}", serialize_with(&parse(&source), &options.serialize));
        }
        "check" => {
            let output = serialize_with(&parse(&source), &options.serialize);
            let (expected, actual) = (normalize_whitespace(&source), normalize_whitespace(&output));
            if expected != actual {
                eprintln!("{file}: does not round-trip");
                eprintln!("--- source (normalized)\n{expected}");
                eprintln!("--- serialized (normalized)\n{actual}");
                process::exit(1);
            }
            info!("{file} round-trips");
            println!("{file}: ok");
        }
        "replay" => {
            let Some(script) = args.get(3) else {
                eprintln!("Usage: {program} replay <file> <keys>");
                process::exit(1);
            };
            let mut session = EditorSession::from_markdown(&source, options)?;
            let keys = parse_script(script);
            debug!("replaying {} key(s)", keys.len());
            session.replay(&keys);
            print!("{}", session.markdown());
        }
        other => {
            eprintln!("Error: unknown command '{other}'");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    }

    Ok(())
}
