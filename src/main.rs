use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::path::PathBuf;
use vendedor::prelude::*;

#[derive(Parser)]
#[command(name = "vendedor")]
#[command(about = "A Rust-based backtesting engine for short deep-OTM option books", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    //run a backtest
    Run {
        //path to csv data file
        #[arg(long)]
        data: PathBuf,

        //trading dates between rebalances
        #[arg(long, default_value = "5")]
        period: usize,

        //total notional capital
        #[arg(long, default_value = "1000000")]
        capital: f64,

        //contracts sold per rebalance
        #[arg(long, default_value = "5")]
        amount: usize,

        //contract notional multiplier (100 for 300etf, 300 for 50etf)
        #[arg(long, default_value = "100")]
        multiplier: f64,

        //output path for nav curve csv
        #[arg(long)]
        output_nav_csv: Option<PathBuf>,

        //output path for trade log csv
        #[arg(long)]
        output_trades_csv: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            data,
            period,
            capital,
            amount,
            multiplier,
            output_nav_csv,
            output_trades_csv,
        } => {
            run_backtest(
                data,
                period,
                capital,
                amount,
                multiplier,
                output_nav_csv,
                output_trades_csv,
            )?;
        }
    }

    Ok(())
}

fn run_backtest(
    data_path: PathBuf,
    period: usize,
    capital: f64,
    amount: usize,
    multiplier: f64,
    output_nav_csv: Option<PathBuf>,
    output_trades_csv: Option<PathBuf>,
) -> Result<()> {
    println!("Vendedor Option-Selling Backtesting Engine");
    println!("==========================================\n");

    //load data
    println!("Loading data from {:?}...", data_path);
    let observations =
        load_csv(&data_path).context(format!("Failed to load data from {:?}", data_path))?;

    if observations.is_empty() {
        anyhow::bail!("No observations found in {:?}", data_path);
    }

    let symbols: BTreeSet<&str> = observations.iter().map(|obs| obs.symbol.as_str()).collect();
    println!(
        "Loaded {} observations across {} contracts",
        observations.len(),
        symbols.len()
    );
    println!(
        "Date range: {} to {}\n",
        observations.first().unwrap().trading_date,
        observations.last().unwrap().trading_date
    );

    let config = StrategyConfig {
        period,
        capital,
        amount,
        multiplier,
    };
    config.validate()?;

    println!("Rebalance period: {} trading dates", config.period);
    println!("Capital: {:.2}", config.capital);
    println!("Contracts per period: {}", config.amount);
    println!("Contract multiplier: {}\n", config.multiplier);

    //run backtest
    println!("Running backtest...\n");
    let engine = BacktestEngine::new(config, observations);
    let result = engine.run()?;

    //display trade log
    for trade in &result.trades {
        println!(
            "Trade: open {} close {} contracts {}",
            trade.open_date,
            trade.close_date,
            trade.symbols.join(", ")
        );
    }

    //display results
    println!("\nBacktest Results");
    println!("================\n");
    result.report.pretty_print_table();

    //save outputs if requested
    if let Some(nav_path) = output_nav_csv {
        save_nav_csv(&result.nav, &nav_path)?;
        println!("\nNAV curve saved to {:?}", nav_path);
    }

    if let Some(trades_path) = output_trades_csv {
        save_trades_csv(&result.trades, &trades_path)?;
        println!("Trades saved to {:?}", trades_path);
    }

    Ok(())
}

fn save_nav_csv(nav: &[NavPoint], path: &PathBuf) -> Result<()> {
    use std::io::Write;

    let mut file = std::fs::File::create(path)?;
    writeln!(file, "date,nav,drawdown,profit")?;

    for point in nav {
        writeln!(
            file,
            "{},{},{},{}",
            point.date, point.nav, point.drawdown, point.profit
        )?;
    }

    Ok(())
}

fn save_trades_csv(trades: &[TradeRecord], path: &PathBuf) -> Result<()> {
    use std::io::Write;

    let mut file = std::fs::File::create(path)?;
    writeln!(file, "open_date,close_date,symbols")?;

    for trade in trades {
        writeln!(
            file,
            "{},{},{}",
            trade.open_date,
            trade.close_date,
            trade.symbols.join(";")
        )?;
    }

    Ok(())
}
