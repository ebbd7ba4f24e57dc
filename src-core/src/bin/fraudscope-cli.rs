//! Command-line tester for the FraudScope scoring service.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fraudscope_core::analysis::{self, AnalysisOutcome};
use fraudscope_core::client::check_api_status;
use fraudscope_core::history::FileStorage;
use fraudscope_core::view::{format_amount, format_percent};
use fraudscope_core::{
    ClientConfig, FieldId, FormPreset, FormValues, FraudScopeError, HistoryRowView, HistoryStore,
    ScoringApi, ScoringClient, TransactionDetailView, TransactionInput,
};

#[derive(Parser)]
#[command(name = "fraudscope-cli", version, about = "Score transactions against a FraudScope API")]
struct Cli {
    /// Scoring service origin (overrides config file and FRAUDSCOPE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the analysis history
    #[arg(long, global = true)]
    history_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check service health and print model information
    Health,
    /// Score one transaction; omitted fields come from the preset
    Predict(PredictArgs),
    /// Score a canned transaction: default, fraud, legitimate or suspicious
    Example { preset: String },
    /// Score a JSON array of transactions in one request (not recorded)
    Batch { file: PathBuf },
    /// Browse past analyses
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    List,
    Show { id: i64 },
}

#[derive(Args)]
struct PredictArgs {
    #[arg(long, default_value = "default")]
    preset: String,
    #[arg(long)]
    gender: Option<String>,
    #[arg(long)]
    age: Option<String>,
    #[arg(long)]
    house_type: Option<String>,
    #[arg(long)]
    contact_available: Option<String>,
    #[arg(long)]
    home_country: Option<String>,
    #[arg(long)]
    account_no: Option<String>,
    #[arg(long)]
    card_expiry: Option<String>,
    #[arg(long)]
    amount: Option<String>,
    #[arg(long)]
    transaction_country: Option<String>,
    #[arg(long)]
    large_purchase: Option<String>,
    #[arg(long)]
    product_id: Option<String>,
    #[arg(long)]
    cif: Option<String>,
    #[arg(long)]
    currency_code: Option<String>,
}

impl PredictArgs {
    fn form_values(&self) -> Result<FormValues> {
        let mut values = FormValues::preset(parse_preset(&self.preset)?);
        let overrides = [
            (FieldId::Gender, &self.gender),
            (FieldId::Age, &self.age),
            (FieldId::HouseType, &self.house_type),
            (FieldId::ContactAvailable, &self.contact_available),
            (FieldId::HomeCountry, &self.home_country),
            (FieldId::AccountNo, &self.account_no),
            (FieldId::CardExpiry, &self.card_expiry),
            (FieldId::Amount, &self.amount),
            (FieldId::TransactionCountry, &self.transaction_country),
            (FieldId::LargePurchase, &self.large_purchase),
            (FieldId::ProductId, &self.product_id),
            (FieldId::Cif, &self.cif),
            (FieldId::CurrencyCode, &self.currency_code),
        ];
        for (field, value) in overrides {
            if let Some(v) = value {
                values.set(field, v.clone());
            }
        }
        Ok(values)
    }
}

fn parse_preset(name: &str) -> Result<FormPreset> {
    FormPreset::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = FormPreset::ALL.iter().map(|p| p.name()).collect();
        anyhow!("Unknown preset '{}' (expected one of: {})", name, known.join(", "))
    })
}

fn open_history(config: &ClientConfig, dir: &Path) -> HistoryStore<FileStorage> {
    HistoryStore::open_with(FileStorage::new(dir), &config.storage_key, config.history_capacity)
}

fn print_outcome(outcome: &AnalysisOutcome) {
    let view = &outcome.view;
    println!("{}", view.headline);
    println!("  Fraud probability: {}", view.fraud_percent);
    println!("  Confidence:        {}", view.confidence_percent);
    println!("  Risk level:        {}", view.risk_label);
    println!();
    println!("{}", view.recommendation.title());
    for action in view.recommendation.actions() {
        println!("  - {}", action);
    }
    if let Some(entry) = &outcome.entry {
        println!();
        println!("Saved to history as #{}", entry.id);
    }
    println!("{}", outcome.notice.message);
}

async fn run_predict(client: &ScoringClient, history: &mut HistoryStore<FileStorage>, values: FormValues) -> Result<()> {
    match analysis::submit(client, history, &values).await {
        Ok(outcome) => {
            print_outcome(&outcome);
            Ok(())
        }
        Err(FraudScopeError::Validation(errors)) => {
            for e in &errors {
                eprintln!("  {}", e);
            }
            bail!("Please fix the errors in the form")
        }
        Err(e) => Err(anyhow!(e.user_message())),
    }
}

async fn run_health(client: &ScoringClient) -> Result<()> {
    match check_api_status(client).await {
        Some(status) => {
            println!("Status:       {}", status.status);
            if let Some(loaded) = status.model_loaded {
                println!("Model loaded: {}", loaded);
            }
            if let Some(ts) = &status.timestamp {
                println!("Timestamp:    {}", ts);
            }
        }
        None => bail!("Cannot reach the scoring API at {}", client.base_url()),
    }

    match client.model_info().await {
        Ok(info) => {
            println!("Model:        {}", info.model_name.as_deref().unwrap_or("Unknown"));
            if let Some(acc) = info.accuracy {
                println!("Accuracy:     {:.3}", acc);
            }
            if let Some(f1) = info.f1_score {
                println!("F1-score:     {:.3}", f1);
            }
            println!("Features:     {}", info.features.len());
        }
        Err(e) => println!("Model info:   {}", e),
    }
    Ok(())
}

async fn run_batch(client: &ScoringClient, file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file).with_context(|| format!("Failed to read {:?}", file))?;
    let inputs: Vec<TransactionInput> =
        serde_json::from_str(&content).with_context(|| format!("{:?} is not a JSON array of transactions", file))?;

    let response = client.predict_batch(&inputs).await.map_err(|e| anyhow!(e.user_message()))?;

    println!("Transactions: {}", inputs.len());
    if let Some(model) = &response.model_info {
        println!("Model:        {} (F1 {:.3})", model.name, model.f1_score);
    }
    for (i, (input, prediction)) in inputs.iter().zip(&response.predictions).enumerate() {
        println!(
            "  #{}: {} -> {} ({})",
            i + 1,
            format_amount(input.transaction_amount),
            prediction.prediction_label.as_str(),
            format_percent(prediction.fraud_probability())
        );
    }
    Ok(())
}

fn run_history(history: &HistoryStore<FileStorage>, action: &HistoryAction) {
    match action {
        HistoryAction::List => {
            if history.is_empty() {
                println!("No transactions analysed yet");
                return;
            }
            for row in history.entries().iter().map(HistoryRowView::from) {
                println!(
                    "{:>14}  {}  {:>12}  {:<15} {:<14} {:>6}",
                    row.id, row.timestamp, row.amount, row.country, row.label_text, row.risk_percent
                );
            }
        }
        HistoryAction::Show { id } => {
            let Some(detail) = history.lookup(*id).map(TransactionDetailView::from) else {
                println!("No transaction with id {}", id);
                return;
            };
            println!("Transaction #{} ({})", detail.id, detail.timestamp);
            println!("  Gender:         {}", detail.gender);
            println!("  Age:            {}", detail.age);
            println!("  Housing:        {}", detail.housing);
            println!("  Amount:         {}", detail.amount);
            println!("  Country:        {}", detail.country);
            println!("  Large purchase: {}", detail.large_purchase);
            println!("  Prediction:     {}", detail.label_text);
            println!("  Fraud risk:     {}", detail.risk_percent);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::load(cli.config.as_deref())?;
    config.apply_url_override(cli.api_url.clone());
    config.validate()?;

    let history_dir = cli
        .history_dir
        .clone()
        .or_else(|| dirs::data_dir().map(|d| d.join("fraudscope")))
        .context("No data directory available, pass --history-dir")?;

    let client = ScoringClient::new(&config.api_base_url)?;

    match &cli.command {
        Command::Health => run_health(&client).await,
        Command::Predict(args) => {
            let values = args.form_values()?;
            let mut history = open_history(&config, &history_dir);
            run_predict(&client, &mut history, values).await
        }
        Command::Example { preset } => {
            let values = FormValues::preset(parse_preset(preset)?);
            let mut history = open_history(&config, &history_dir);
            run_predict(&client, &mut history, values).await
        }
        Command::Batch { file } => run_batch(&client, file).await,
        Command::History { action } => {
            run_history(&open_history(&config, &history_dir), action);
            Ok(())
        }
    }
}
