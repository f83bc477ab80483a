use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use legacy360::assessment::{
    AnswerCsv, AnswerSheet, AssessmentInsights, Catalog, DerivedRecord, Language, LocalizedText,
    ScoreReportSummary, ScoringConfig, ScoringEngine,
};
use legacy360::config::AppConfig;
use legacy360::error::AppError;
use legacy360::telemetry;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "legacy360",
    about = "Score the Legacy360 family governance and succession assessment",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the questionnaire grouped by domain
    Questions(QuestionsArgs),
    /// Write a blank answer sheet to fill in
    Template(TemplateArgs),
    /// Score a completed answer sheet and print the results report
    Score(ScoreArgs),
}

#[derive(Args, Debug)]
struct QuestionsArgs {
    /// Questionnaire language (GR or EN); defaults to APP_LANG
    #[arg(long, value_parser = parse_language)]
    lang: Option<Language>,
}

#[derive(Args, Debug)]
struct TemplateArgs {
    /// Write the CSV template here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Answer sheet in the exported CSV format
    answers: PathBuf,
    /// Report language (GR or EN); defaults to APP_LANG
    #[arg(long, value_parser = parse_language)]
    lang: Option<Language>,
    /// Number of domains in the priority list; defaults to APP_PRIORITY_LIMIT
    #[arg(long, value_parser = parse_priority_limit)]
    top: Option<usize>,
    /// Emit the derived JSON record instead of the text report
    #[arg(long)]
    json: bool,
    /// Also write the normalized answer record to this CSV path
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let catalog = Catalog::standard()?;
    info!(
        environment = ?config.environment,
        questions = catalog.questions().len(),
        "questionnaire catalog loaded"
    );

    match cli.command {
        Command::Questions(args) => {
            print_questions(&catalog, args.lang.unwrap_or(config.assessment.language));
            Ok(())
        }
        Command::Template(args) => write_template(&catalog, args),
        Command::Score(args) => {
            let scoring = ScoringConfig {
                priority_limit: args.top.unwrap_or(config.assessment.priority_limit),
            };
            let language = args.lang.unwrap_or(config.assessment.language);
            run_score(ScoringEngine::new(catalog, scoring), language, args)
        }
    }
}

fn parse_language(raw: &str) -> Result<Language, String> {
    Language::parse(raw).ok_or_else(|| format!("unsupported language '{raw}' (use GR or EN)"))
}

fn parse_priority_limit(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(format!("'{raw}' is not a positive integer")),
    }
}

fn write_template(catalog: &Catalog, args: TemplateArgs) -> Result<(), AppError> {
    let empty = AnswerSheet::new();
    match args.output {
        Some(path) => {
            AnswerCsv::write_path(catalog, &empty, &path)?;
            info!(path = %path.display(), "answer template written");
        }
        None => {
            let stdout = std::io::stdout();
            AnswerCsv::write(catalog, &empty, stdout.lock())?;
        }
    }
    Ok(())
}

fn run_score(engine: ScoringEngine, language: Language, args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers: answers_path,
        json,
        export,
        ..
    } = args;

    let answers = AnswerCsv::read_path(engine.catalog(), &answers_path)?;
    info!(
        path = %answers_path.display(),
        answered = answers.len(),
        "answer sheet imported"
    );

    if let Some(path) = export {
        AnswerCsv::write_path(engine.catalog(), &answers, &path)?;
        info!(path = %path.display(), "answer record exported");
    }

    let report = engine.evaluate(&answers).into_report()?;
    let summary = engine.summarize(&report, language);

    if json {
        let record = DerivedRecord::new(&summary, Utc::now());
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", record.to_json_pretty()?)?;
    } else {
        render_report(&summary, &summary.insights());
    }

    Ok(())
}

const TITLE: LocalizedText = LocalizedText::new(
    "Legacy360°: Χάρτης Οικογενειακής Διακυβέρνησης & Διαδοχής",
    "Legacy360°: Family Governance & Succession Roadmap",
);
const OVERALL: LocalizedText = LocalizedText::new("Συνολικός δείκτης", "Overall index");
const DOMAINS: LocalizedText = LocalizedText::new("Τομείς", "Domains");
const PRIORITIES: LocalizedText = LocalizedText::new("Προτεραιότητες", "Priorities");
const INTERPRETATION: LocalizedText = LocalizedText::new("Ερμηνεία", "Interpretation");
const ACTIONS: LocalizedText = LocalizedText::new("Προτεινόμενες ενέργειες", "Recommended actions");
const WEIGHT: LocalizedText = LocalizedText::new("βάρος", "weight");
const RISK: LocalizedText = LocalizedText::new("κίνδυνος", "risk");

fn print_questions(catalog: &Catalog, language: Language) {
    println!("{}", TITLE.get(language));
    for domain in catalog.domains() {
        println!(
            "\n{} ({} {:.0}%)",
            domain.label.get(language),
            WEIGHT.get(language),
            domain.weight * 100.0
        );
        for question in catalog.questions_for_domain(domain.key) {
            println!("- [{}] {}", question.id, question.text.get(language));
        }
    }
}

fn render_report(summary: &ScoreReportSummary, insights: &AssessmentInsights) {
    let language = summary.language;

    println!("{}", TITLE.get(language));
    println!(
        "{}: {:.1}/100 ({})",
        OVERALL.get(language),
        summary.overall_index,
        summary.overall_band_label
    );
    println!("{}", insights.headline);

    println!("\n{}", DOMAINS.get(language));
    for domain in &summary.domains {
        println!(
            "- {}: {:.2} [{}], {} {:.2}, {} {:.3}",
            domain.label,
            domain.average,
            domain.band_label,
            WEIGHT.get(language),
            domain.weight,
            RISK.get(language),
            domain.risk
        );
    }

    println!("\n{}", PRIORITIES.get(language));
    for (rank, domain) in summary.priorities.iter().enumerate() {
        println!(
            "{}. {} ({} {:.3})",
            rank + 1,
            domain.label,
            RISK.get(language),
            domain.risk
        );
    }

    println!("\n{}", INTERPRETATION.get(language));
    for note in &insights.domain_notes {
        println!("- {}", note.note);
    }
    for observation in &insights.observations {
        println!("- {}", observation);
    }

    println!("\n{}", ACTIONS.get(language));
    for action in &insights.recommended_actions {
        println!("- {}", action);
    }
}
