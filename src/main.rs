use std::process::ExitCode;

use strmap::collections::hash::{AllocFailed, StringMap};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        },
    }
}

fn run() -> Result<(), AllocFailed> {
    let mut map = StringMap::new()?;

    map.insert("name", "Alice")?;
    map.insert("age", "25")?;
    map.insert("city", "Boston")?;
    map.insert("occupation", "Engineer")?;

    for key in ["name", "age", "city", "occupation"] {
        println!("{key}: {}", map.get(key).unwrap_or("-"));
    }

    if map.contains("email") {
        println!("Email exists");
    } else {
        println!("Email doesn't exist");
    }

    map.insert("age", "26")?;
    println!("Updated age: {}", map.get("age").unwrap_or("-"));

    println!("\n{map}");

    println!("All keys:");
    for key in map.keys_owned()? {
        println!("  {key}");
    }

    if map.remove("city").is_some() {
        println!("\nRemoved 'city' successfully");
        println!("{map}");
    }

    println!("Load factor: {:.2}", map.load_factor());

    drop(map);
    println!("StringMap dropped");

    Ok(())
}
