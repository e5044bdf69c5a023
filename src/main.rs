use datekit::configuration::Configuration;
use datekit::dateutils::DateUtils;
use datekit::logging::init_tracing;
use datekit::time::clock::Clock;
use datekit::time::dateunit::DateUnit;
use datekit::time::period::Period;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(config_path) => Configuration::from_reader(config_path)?,
        None => Configuration::new()
    }.with_env_override();
    init_tracing(&config.log_level);

    let utils = DateUtils::from_configuration(&config);
    let year = utils.get_current_year();
    println!("current year: {}", year);

    let today = utils.clock().now();
    for unit in DateUnit::ALL {
        println!("{} + 1 {}: {}", today.date(), unit, utils.add(today, 1, unit)?.date());
    }
    let tenor = Period::parse("3M")?;
    println!("{} + {}: {}", today.date(), tenor, (today + tenor).date());

    for holiday in &utils.get_holidays(year).await {
        println!("{}: {}", holiday.date(), holiday.name());
    }
    println!("today is a holiday: {}", utils.is_holiday(today).await);
    Ok(())
}
