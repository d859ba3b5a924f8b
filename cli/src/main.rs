//! plan2docx CLI - expert report generator
//!
//! A command-line tool for turning AI plan analyses into DOCX reports.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use plan2docx::model::Block;
use plan2docx::{
    media, transcode, BrandingConfig, ReportBuilder, ReportLabels, ReportRequest,
    DEFAULT_CONFIG_FILE,
};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// AI plan analysis to letterheaded DOCX reports
#[derive(Parser)]
#[command(
    name = "plan2docx",
    author = "iyulab",
    version,
    about = "Build DOCX expert reports from AI-generated Markdown",
    long_about = "plan2docx - Expert report generator.\n\n\
                  Converts the Markdown analysis of a technical plan into a Word\n\
                  document with the company letterhead.\n\n\
                  Usage:\n  \
                  plan2docx <report.md>            Build with default settings\n  \
                  plan2docx build <report.md> ...  Build with context, prompt and plan image"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input Markdown file (for default build)
    #[arg(global = false)]
    input: Option<PathBuf>,

    /// Branding configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a DOCX report from a Markdown analysis
    Build {
        /// Markdown analysis file
        input: PathBuf,

        /// Analyzed plan image (PNG, JPEG, GIF, BMP)
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Project context text
        #[arg(long, default_value = "")]
        context: String,

        /// Request text sent with the plan
        #[arg(long, default_value = "")]
        prompt: String,

        /// Use English section labels
        #[arg(long)]
        english: bool,

        /// Output file path (default: Rapport_Expertise_<date>.docx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Dump the transcoded Markdown blocks as JSON
    Json {
        /// Markdown analysis file
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Show statistics of a Markdown analysis
    Info {
        /// Markdown analysis file
        input: PathBuf,
    },

    /// Manage the branding configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current branding
    Show,

    /// Write a configuration file with placeholder values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Update branding fields
    Set {
        /// Company name
        #[arg(long)]
        name: Option<String>,

        /// Postal address
        #[arg(long)]
        address: Option<String>,

        /// Phone and e-mail line
        #[arg(long)]
        contact: Option<String>,

        /// Fields of expertise
        #[arg(long)]
        expertise: Option<String>,

        /// Logo image file
        #[arg(long)]
        logo: Option<PathBuf>,

        /// Remove the stored logo
        #[arg(long, conflicts_with = "logo")]
        clear_logo: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(command) = cli.command else {
        // Handle default command (plan2docx <file>)
        if let Some(input) = cli.input {
            return run_build(
                &input,
                None,
                String::new(),
                String::new(),
                false,
                None,
                &cli.config,
            );
        }
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Build {
            input,
            image,
            context,
            prompt,
            english,
            output,
        } => {
            run_build(
                &input,
                image.as_deref(),
                context,
                prompt,
                english,
                output,
                &cli.config,
            )?;
        }

        Commands::Json {
            input,
            output,
            compact,
        } => {
            let blocks = transcode(&fs::read_to_string(&input)?);
            let json = if compact {
                serde_json::to_string(&blocks)?
            } else {
                serde_json::to_string_pretty(&blocks)?
            };

            write_output(output.as_ref(), &json)?;

            if let Some(path) = output {
                println!(
                    "{} Transcoded to JSON: {}",
                    "✓".green().bold(),
                    path.display()
                );
            }
        }

        Commands::Info { input } => {
            let markdown = fs::read_to_string(&input)?;
            print_info(&input, &markdown);
        }

        Commands::Config { action } => run_config(action, &cli.config)?,

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn run_build(
    input: &Path,
    image: Option<&Path>,
    context: String,
    prompt: String,
    english: bool,
    output: Option<PathBuf>,
    config: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = create_spinner("Loading inputs...");

    let branding = BrandingConfig::load(config)?;
    let mut request = ReportRequest::new(fs::read_to_string(input)?)
        .with_context(context)
        .with_prompt(prompt);
    if let Some(path) = image {
        request = request.with_reference_image(fs::read(path)?);
    }

    pb.set_message("Composing report...");
    let mut builder = ReportBuilder::new();
    if english {
        builder = builder.with_labels(ReportLabels::english());
    }
    let report = builder.build(&request, &branding)?;

    pb.set_message("Writing DOCX...");
    let output = output.unwrap_or_else(|| PathBuf::from(report.filename()));
    report.write_to(&output)?;

    pb.finish_and_clear();

    let document = report.document();
    println!("{}", "Report Complete".green().bold());
    println!("{}", "─".repeat(40));
    println!("{}: {}", "Output".bold(), output.display());
    println!("{}: {}", "Company".bold(), branding.name);
    println!("{}: {}", "Paragraphs".bold(), document.paragraph_count());
    println!("{}: {}", "Tables".bold(), document.table_count());
    println!("{}: {}", "Images".bold(), document.resources.len());

    Ok(())
}

fn run_config(action: ConfigAction, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let branding = BrandingConfig::load(path)?;
            println!("{}", "Branding".cyan().bold());
            println!("{}", "─".repeat(40));
            println!("{}: {}", "File".bold(), path.display());
            println!("{}: {}", "Name".bold(), branding.name);
            println!("{}: {}", "Address".bold(), branding.address);
            println!("{}: {}", "Contact".bold(), branding.contact);
            println!("{}: {}", "Expertise".bold(), branding.tagline);
            match branding.logo {
                Some(ref logo) => println!("{}: {} bytes", "Logo".bold(), logo.len()),
                None => println!("{}: {}", "Logo".bold(), "none".dimmed()),
            }
        }

        ConfigAction::Init { force } => {
            if path.exists() && !force {
                println!(
                    "{} {} already exists (use --force to overwrite)",
                    "!".yellow().bold(),
                    path.display()
                );
                return Ok(());
            }
            BrandingConfig::default().save(path)?;
            println!("{} Created {}", "✓".green().bold(), path.display());
        }

        ConfigAction::Set {
            name,
            address,
            contact,
            expertise,
            logo,
            clear_logo,
        } => {
            let mut branding = BrandingConfig::load(path)?;
            if let Some(name) = name {
                branding.name = name;
            }
            if let Some(address) = address {
                branding.address = address;
            }
            if let Some(contact) = contact {
                branding.contact = contact;
            }
            if let Some(expertise) = expertise {
                branding.tagline = expertise;
            }
            if let Some(logo) = logo {
                let data = fs::read(&logo)?;
                // Reject undecodable logos before they reach every report
                let resource = media::decode_image("logo", &data)?;
                log::debug!(
                    "Logo {} is {}x{} {}",
                    logo.display(),
                    resource.width,
                    resource.height,
                    resource.mime_type
                );
                branding.logo = Some(data);
            }
            if clear_logo {
                branding.logo = None;
            }
            branding.save(path)?;
            println!("{} Updated {}", "✓".green().bold(), path.display());
        }
    }

    Ok(())
}

fn print_info(input: &Path, markdown: &str) {
    let blocks = transcode(markdown);

    let mut headings = 0;
    let mut bullets = 0;
    let mut paragraphs = 0;
    let mut tables = 0;
    let mut rows = 0;
    for block in &blocks {
        match block {
            Block::Paragraph(p) if p.style.is_heading() => headings += 1,
            Block::Paragraph(p) if p.style.is_list_item() => bullets += 1,
            Block::Paragraph(_) => paragraphs += 1,
            Block::Table(t) => {
                tables += 1;
                rows += t.row_count();
            }
        }
    }

    println!("{}", "Analysis Information".cyan().bold());
    println!("{}", "─".repeat(40));
    println!(
        "{}: {}",
        "File".bold(),
        input.file_name().unwrap_or_default().to_string_lossy()
    );
    println!("{}: {}", "Lines".bold(), markdown.lines().count());
    println!("{}: {}", "Blocks".bold(), blocks.len());

    let text = plan2docx::model::blocks_plain_text(&blocks);
    println!("\n{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40));
    println!("{}: {}", "Headings".bold(), headings);
    println!("{}: {}", "Bullets".bold(), bullets);
    println!("{}: {}", "Paragraphs".bold(), paragraphs);
    println!("{}: {} ({} rows)", "Tables".bold(), tables, rows);
    println!("{}: {}", "Words".bold(), text.split_whitespace().count());
}

fn print_version() {
    println!("{} {}", "plan2docx".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("AI plan analysis to letterheaded DOCX reports");
    println!();
    println!("Supported images: PNG, JPEG, GIF, BMP");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.blue} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
