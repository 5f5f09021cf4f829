use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;

use woundcare_chat::WoundCareBot;
use woundcare_core::models::assessment::AssessmentInput;
use woundcare_knowledge::{responses, risk, rubric, therapies};
use woundcare_plan::generate_care_plan;

#[derive(Parser)]
#[command(name = "woundcare")]
#[command(about = "Rule-based wound care guidance: chat assistant and care-plan generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat session
    Chat,
    /// Ask a single question and print the response
    Ask {
        /// The question text
        question: String,
    },
    /// Generate a care plan from a JSON assessment
    Plan {
        /// Path to the assessment JSON; reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Emit the plan as JSON instead of sectioned text
        #[arg(long)]
        json: bool,
    },
    /// Print reference data
    Reference {
        #[command(subcommand)]
        table: ReferenceTable,
        /// Emit the table as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ReferenceTable {
    /// Wound assessment rubric
    Rubric,
    /// Risk assessment scales
    RiskScales,
    /// Advanced wound therapies
    Therapies,
    /// Further-reading resources
    Resources,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat => run_chat(),
        Commands::Ask { question } => {
            let mut bot = WoundCareBot::new();
            println!("{}", bot.process_query(&question));
            Ok(())
        }
        Commands::Plan { input, json } => run_plan(input, json),
        Commands::Reference { table, json } => print_reference(table, json),
    }
}

fn run_chat() -> Result<()> {
    let mut bot = WoundCareBot::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Wound care assistant. Type 'exit' to quit.");
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let message = line.trim();
        if message.is_empty() {
            continue;
        }
        if message == "exit" || message == "quit" {
            break;
        }

        println!("{}", bot.process_query(message));
    }

    Ok(())
}

fn run_plan(input: Option<PathBuf>, json: bool) -> Result<()> {
    let json_input = match input {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| eyre::eyre!("failed to read assessment at {}: {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let assessment = AssessmentInput::from_json(&json_input)?;
    let plan = generate_care_plan(&assessment)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("=== Patient Summary ===");
    println!("{}\n", plan.summary);
    println!("=== Primary Recommendations ===");
    println!("{}\n", plan.primary_recommendations);
    if !plan.additional_recommendations.is_empty() {
        println!("=== Additional Recommendations ===");
        println!("{}\n", plan.additional_recommendations);
    }
    println!("=== Follow-Up ===");
    println!("{}\n", plan.follow_up);
    if let Some(warnings) = &plan.warnings {
        println!("=== Warnings ===");
        println!("{warnings}\n");
    }
    println!("{}", plan.disclaimer);

    Ok(())
}

fn print_reference(table: ReferenceTable, json: bool) -> Result<()> {
    if json {
        let rendered = match table {
            ReferenceTable::Rubric => serde_json::to_string_pretty(rubric::assessment_rubric())?,
            ReferenceTable::RiskScales => serde_json::to_string_pretty(risk::risk_scales())?,
            ReferenceTable::Therapies => {
                serde_json::to_string_pretty(therapies::advanced_therapies())?
            }
            ReferenceTable::Resources => serde_json::to_string_pretty(responses::RESOURCES)?,
        };
        println!("{rendered}");
        return Ok(());
    }

    match table {
        ReferenceTable::Rubric => {
            for section in rubric::assessment_rubric() {
                println!("{}:", section.name);
                for item in section.items {
                    println!("  {} - {}", item.term, item.description);
                }
                println!();
            }
        }
        ReferenceTable::RiskScales => {
            for scale in risk::risk_scales() {
                println!("{} ({})", scale.name, scale.purpose);
                for parameter in scale.parameters {
                    println!("  - {parameter}");
                }
                for grade in scale.grades {
                    println!("  {grade}");
                }
                if let Some(scoring) = scale.scoring {
                    println!("  Scoring: {scoring}");
                }
                if let Some(application) = scale.application {
                    println!("  Application: {application}");
                }
                println!();
            }
        }
        ReferenceTable::Therapies => {
            for therapy in therapies::advanced_therapies() {
                println!("{}", therapy.name);
                if let Some(mechanism) = therapy.mechanism {
                    println!("  Mechanism: {mechanism}");
                }
                print_list("Benefits", therapy.benefits);
                print_list("Types", therapy.types);
                print_list("Indications", therapy.indications);
                print_list("Contraindications", therapy.contraindications);
                println!();
            }
        }
        ReferenceTable::Resources => println!("{}", responses::RESOURCES),
    }

    Ok(())
}

fn print_list(label: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    println!("  {label}:");
    for item in items {
        println!("    - {item}");
    }
}
