//! pulpit CLI - church content generation and formatting tool

mod server;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pulpit::bible::SearchResult;
use pulpit::generate::{DEFAULT_API_URL, DEFAULT_AUDIENCE, DEFAULT_MODEL};
use pulpit::model::slugify;
use pulpit::store::{Draft, HistoryEntry, SavedTemplate};
use pulpit::{
    Api, BibleService, CleanupPreset, ContentDocument, ContentType, GenerationRequest,
    GenerationResponse, GenerationStatus, Generator, GeneratorConfig, JsonFormat, LineClassifier,
    LocalState, ParseOptions, PrintOptions, RefineRequest, RenderOptions, ScriptureRecognizer,
    ScriptureReference, Theme,
};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "pulpit")]
#[command(author = "pulpit contributors")]
#[command(version)]
#[command(about = "Generate, format and export church content", long_about = None)]
struct Cli {
    /// Directory for history, favorites, templates and drafts
    #[arg(long, global = true, env = "PULPIT_STATE_DIR", value_name = "DIR")]
    state_dir: Option<PathBuf>,

    /// Chat-completions API key; without one, demo content is served
    #[arg(long, global = true, env = "AI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Chat-completions API root
    #[arg(long, global = true, env = "OPENAI_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Model name
    #[arg(long, global = true, env = "PULPIT_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Use only the built-in verse table
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, env = "PULPIT_ADDR", default_value = "127.0.0.1:3000")]
        addr: String,
    },

    /// Generate content for a topic
    #[command(alias = "gen")]
    Generate {
        /// Topic to write about
        #[arg(value_name = "TOPIC")]
        topic: String,

        /// Content type (sermon, devotional, bibleStudy, prayer, announcement, bulletin)
        #[arg(short = 't', long = "type", default_value = "sermon")]
        content_type: ContentType,

        /// Focus scripture
        #[arg(short, long)]
        scripture: Option<String>,

        /// Target audience
        #[arg(short, long, default_value = DEFAULT_AUDIENCE)]
        audience: String,

        /// Service time
        #[arg(long)]
        service_time: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: OutputFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Do not record the result in history
        #[arg(long)]
        no_history: bool,
    },

    /// Suggest topics for a content type
    Suggest {
        /// Content type
        #[arg(short = 't', long = "type", default_value = "sermon")]
        content_type: ContentType,

        /// Target audience
        #[arg(short, long, default_value = DEFAULT_AUDIENCE)]
        audience: String,
    },

    /// Revise existing content following an instruction
    Refine {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// What to change
        #[arg(short, long)]
        instruction: String,

        /// Content type
        #[arg(short = 't', long = "type", default_value = "sermon")]
        content_type: ContentType,

        /// Title of the content
        #[arg(long, default_value = "")]
        title: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Classify content and render it
    Parse {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: OutputFormat,

        /// Include a table of contents (HTML)
        #[arg(long)]
        toc: bool,

        /// Fill scripture lines with verse text (HTML)
        #[arg(long)]
        inline_verses: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List the scripture references in a file
    Refs {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up a verse or passage ("John 3:16", "Psalm 23:1-6")
    Verse {
        /// Reference
        #[arg(value_name = "REFERENCE", num_args = 1.., required = true)]
        reference: Vec<String>,
    },

    /// List the books of the Bible
    Books,

    /// List the chapters of a book
    Chapters {
        /// Book name
        #[arg(value_name = "BOOK", num_args = 1.., required = true)]
        book: Vec<String>,
    },

    /// Search the built-in verses
    Search {
        /// Words to look for
        #[arg(value_name = "QUERY", num_args = 1.., required = true)]
        query: Vec<String>,
    },

    /// List favorite verses, or toggle one
    Favorites {
        /// Reference to add or remove
        #[arg(long, value_name = "REFERENCE")]
        toggle: Option<String>,
    },

    /// List recently viewed verses
    Recent,

    /// List generated content, show an entry, or clear history
    History {
        /// Print the entry at this position (1 = newest)
        #[arg(long, value_name = "N")]
        show: Option<usize>,

        /// Remove all entries
        #[arg(long)]
        clear: bool,
    },

    /// Manage the saved draft
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },

    /// Manage saved generation templates
    Templates {
        #[command(subcommand)]
        action: Option<TemplateAction>,
    },

    /// Export content as a print-ready HTML page
    Export {
        /// Input file ("-" for stdin); omit to export the saved draft
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Export the history entry at this position (1 = newest)
        #[arg(long, value_name = "N", conflicts_with = "input")]
        history: Option<usize>,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Content type
        #[arg(short = 't', long = "type", default_value = "sermon")]
        content_type: ContentType,

        /// Theme (classic, modern, minimal)
        #[arg(long, default_value = "classic")]
        theme: Theme,

        /// Leave out the table of contents
        #[arg(long)]
        no_toc: bool,

        /// Output file (defaults to a name derived from the title)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
enum DraftAction {
    /// Print the draft
    Show,

    /// Save a file as the draft
    Save {
        /// Input file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Draft title
        #[arg(long, default_value = "Untitled")]
        title: String,

        /// Content type
        #[arg(short = 't', long = "type", default_value = "sermon")]
        content_type: ContentType,
    },

    /// Discard the draft
    Clear,
}

#[derive(Subcommand)]
enum TemplateAction {
    /// List templates
    List,

    /// Save generation parameters under a name
    Save {
        /// Template name
        name: String,

        /// Topic
        #[arg(long)]
        topic: String,

        /// Content type
        #[arg(short = 't', long = "type", default_value = "sermon")]
        content_type: ContentType,

        /// Focus scripture
        #[arg(short, long)]
        scripture: Option<String>,

        /// Target audience
        #[arg(short, long, default_value = DEFAULT_AUDIENCE)]
        audience: String,

        /// Service time
        #[arg(long)]
        service_time: Option<String>,
    },

    /// Delete a template
    Delete {
        /// Template name
        name: String,
    },

    /// Generate content from a template
    Use {
        /// Template name
        name: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// The generated markdown as-is
    Markdown,
    /// HTML fragment
    Html,
    /// Plain text
    Text,
    /// Classified items as JSON
    Json,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Minimal cleanup (Unicode normalization only)
    Minimal,
    /// Standard cleanup (line endings, bullets, whitespace)
    Standard,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
        }
    }
}

/// Settings shared by every command.
struct Context {
    state_dir: Option<PathBuf>,
    config: GeneratorConfig,
    offline: bool,
}

impl Context {
    fn generator(&self) -> Result<Generator, Box<dyn std::error::Error>> {
        Ok(Generator::from_config(&self.config)?)
    }

    fn bible(&self) -> Result<BibleService, Box<dyn std::error::Error>> {
        if self.offline {
            Ok(BibleService::offline())
        } else {
            Ok(BibleService::remote()?)
        }
    }

    fn state(&self) -> Result<LocalState, Box<dyn std::error::Error>> {
        let dir = match &self.state_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .map(|dir| dir.join("pulpit"))
                .ok_or("cannot determine a data directory; pass --state-dir")?,
        };
        Ok(LocalState::open(dir)?)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = GeneratorConfig::new()
        .with_api_url(cli.api_url)
        .with_model(cli.model);
    if let Some(key) = cli.api_key {
        config = config.with_api_key(key);
    }
    let ctx = Context {
        state_dir: cli.state_dir,
        config,
        offline: cli.offline,
    };

    let result = match cli.command {
        Some(Commands::Serve { addr }) => cmd_serve(&ctx, &addr),
        Some(Commands::Generate {
            topic,
            content_type,
            scripture,
            audience,
            service_time,
            format,
            output,
            no_history,
        }) => {
            let mut request = GenerationRequest::new(content_type, topic).with_audience(audience);
            if let Some(scripture) = scripture {
                request = request.with_scripture(scripture);
            }
            if let Some(time) = service_time {
                request = request.with_service_time(time);
            }
            cmd_generate(&ctx, &request, format, output.as_deref(), !no_history)
        }
        Some(Commands::Suggest {
            content_type,
            audience,
        }) => cmd_suggest(&ctx, content_type, &audience),
        Some(Commands::Refine {
            input,
            instruction,
            content_type,
            title,
            output,
        }) => cmd_refine(
            &ctx,
            &input,
            &instruction,
            content_type,
            &title,
            output.as_deref(),
        ),
        Some(Commands::Parse {
            input,
            format,
            toc,
            inline_verses,
            compact,
            cleanup,
            output,
        }) => cmd_parse(
            &ctx,
            &input,
            ParseSettings {
                format,
                toc,
                inline_verses,
                compact,
                cleanup,
            },
            output.as_deref(),
        ),
        Some(Commands::Refs { input, json }) => cmd_refs(&input, json),
        Some(Commands::Verse { reference }) => cmd_verse(&ctx, &reference.join(" ")),
        Some(Commands::Books) => cmd_books(),
        Some(Commands::Chapters { book }) => cmd_chapters(&book.join(" ")),
        Some(Commands::Search { query }) => cmd_search(&query.join(" ")),
        Some(Commands::Favorites { toggle }) => cmd_favorites(&ctx, toggle.as_deref()),
        Some(Commands::Recent) => cmd_recent(&ctx),
        Some(Commands::History { show, clear }) => cmd_history(&ctx, show, clear),
        Some(Commands::Draft { action }) => cmd_draft(&ctx, action),
        Some(Commands::Templates { action }) => {
            cmd_templates(&ctx, action.unwrap_or(TemplateAction::List))
        }
        Some(Commands::Export {
            input,
            history,
            title,
            content_type,
            theme,
            no_toc,
            output,
        }) => {
            let source = match (history, input) {
                (Some(position), _) => ExportSource::History(position),
                (None, Some(path)) => ExportSource::File {
                    path,
                    title,
                    content_type,
                },
                (None, None) => ExportSource::Draft,
            };
            cmd_export(&ctx, source, theme, !no_toc, output.as_deref())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: pulpit <COMMAND>".yellow());
            println!("       pulpit --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_serve(ctx: &Context, addr: &str) -> CliResult {
    let generator = ctx.generator()?;
    if !generator.has_backend() {
        println!(
            "{}",
            "No API key configured: generation serves demo content".yellow()
        );
    }
    let api = Api::new(ctx.bible()?, generator);
    println!("{} http://{}", "Listening on".green().bold(), addr);
    server::serve(&api, addr)
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn cmd_generate(
    ctx: &Context,
    request: &GenerationRequest,
    format: OutputFormat,
    output: Option<&Path>,
    record: bool,
) -> CliResult {
    let generator = ctx.generator()?;

    let pb = spinner(&format!("Writing {}...", request.content_type.label().to_lowercase()));
    let response = generator.generate(request);
    pb.finish_and_clear();

    report_status(&response);
    if record {
        ctx.state()?
            .record_history(HistoryEntry::from_response(request, &response))?;
    }

    println!("{}", response.title.cyan().bold());
    let rendered = render_content(&response.content, format, &RenderOptions::new())?;
    write_output(&rendered, output)
}

fn cmd_suggest(ctx: &Context, content_type: ContentType, audience: &str) -> CliResult {
    let generator = ctx.generator()?;

    let pb = spinner("Finding topics...");
    let response = generator.suggest(content_type, audience);
    pb.finish_and_clear();

    println!(
        "{} {}",
        "Topic ideas for".cyan().bold(),
        content_type.label().to_lowercase().cyan().bold()
    );
    println!("{}", "─".repeat(40).dimmed());
    for (i, topic) in response.suggestions.iter().enumerate() {
        println!("{:>2}. {}", i + 1, topic);
    }
    Ok(())
}

fn cmd_refine(
    ctx: &Context,
    input: &Path,
    instruction: &str,
    content_type: ContentType,
    title: &str,
    output: Option<&Path>,
) -> CliResult {
    let content = read_input(input)?;
    let generator = ctx.generator()?;

    let request = RefineRequest::new(content_type, title, content, instruction);
    let pb = spinner("Revising...");
    let response = generator.refine(&request);
    pb.finish_and_clear();

    report_status(&response);
    write_output(&response.content, output)
}

struct ParseSettings {
    format: OutputFormat,
    toc: bool,
    inline_verses: bool,
    compact: bool,
    cleanup: Option<CleanupLevel>,
}

fn cmd_parse(ctx: &Context, input: &Path, settings: ParseSettings, output: Option<&Path>) -> CliResult {
    let text = read_input(input)?;

    let mut render_options = RenderOptions::new().with_toc(settings.toc);
    let mut parse_options = ParseOptions::new();
    if let Some(level) = settings.cleanup {
        parse_options = parse_options.with_cleanup(true);
        render_options = render_options.with_cleanup_preset(level.into());
    }
    let parsed = LineClassifier::with_options(parse_options).parse(&text);

    let rendered = match settings.format {
        OutputFormat::Markdown => text,
        OutputFormat::Html if settings.inline_verses => {
            let visitor = pulpit::render::InlineVersesVisitor::new(ctx.bible()?);
            pulpit::render::HtmlRenderer::new(render_options)
                .with_visitor(visitor)
                .render(&parsed)?
        }
        OutputFormat::Html => pulpit::render::to_html(&parsed, &render_options)?,
        OutputFormat::Text => pulpit::render::to_text(&parsed, &render_options)?,
        OutputFormat::Json => {
            let format = if settings.compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            pulpit::render::to_json(&parsed, format)?
        }
    };

    write_output(&rendered, output)
}

fn cmd_refs(input: &Path, json: bool) -> CliResult {
    let text = read_input(input)?;
    if json {
        println!("{}", references_json(&text)?);
        return Ok(());
    }
    let found = ScriptureRecognizer::new().find(&text);

    if found.is_empty() {
        println!("{}", "No scripture references found".yellow());
        return Ok(());
    }

    println!("{}", "Scripture References".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for m in &found {
        println!("{:>6}  {}", m.start.to_string().dimmed(), m.text);
    }
    println!("\n{} {}", "Total:".bold(), found.len());
    Ok(())
}

/// Matches with their byte spans, as JSON.
fn references_json(text: &str) -> serde_json::Result<String> {
    let found = ScriptureRecognizer::new().find(text);
    serde_json::to_string_pretty(&serde_json::json!({ "references": found }))
}

fn cmd_verse(ctx: &Context, text: &str) -> CliResult {
    let reference = ScriptureReference::parse(text)
        .ok_or_else(|| format!("not a scripture reference: {}", text))?;
    let bible = ctx.bible()?;

    if reference.is_range() {
        let passage = bible.passage(&reference)?;
        println!("{} {}", passage.reference.cyan().bold(), format!("({})", passage.version).dimmed());
        for verse in &passage.verses {
            println!("{} {}", verse.number.to_string().dimmed(), verse.text);
        }
        if passage.verses.is_empty() {
            println!("{}", "No verses found".yellow());
        }
        return Ok(());
    }

    let verse = bible.lookup(&reference)?;
    println!("{} {}", verse.reference.cyan().bold(), format!("({})", verse.version).dimmed());
    println!("{}", verse.text);

    ctx.state()?.record_verse(verse)?;
    Ok(())
}

fn cmd_books() -> CliResult {
    for (i, book) in BibleService::offline().books().iter().enumerate() {
        if i == 39 {
            println!();
        }
        println!("{:>2}. {}", i + 1, book);
    }
    Ok(())
}

fn cmd_chapters(book: &str) -> CliResult {
    let chapters = BibleService::offline().chapters(book);
    if chapters.is_empty() {
        return Err(format!("unknown book: {}", book).into());
    }
    println!("{}: {} chapters", book.bold(), chapters.len());
    Ok(())
}

fn cmd_search(query: &str) -> CliResult {
    let results: Vec<SearchResult> = BibleService::offline().search(query);
    if results.is_empty() {
        println!("{}", "No matching verses".yellow());
        return Ok(());
    }
    for result in results {
        println!("{}", result.reference.cyan().bold());
        println!("  {}", result.text);
    }
    Ok(())
}

fn cmd_favorites(ctx: &Context, toggle: Option<&str>) -> CliResult {
    let state = ctx.state()?;

    if let Some(text) = toggle {
        let reference = ScriptureReference::parse(text)
            .map(|r| r.to_string())
            .unwrap_or_else(|| text.trim().to_string());
        if state.toggle_favorite(&reference)? {
            println!("{} {}", "Added".green(), reference);
        } else {
            println!("{} {}", "Removed".yellow(), reference);
        }
        return Ok(());
    }

    let favorites = state.favorites()?;
    if favorites.is_empty() {
        println!("{}", "No favorites yet".dimmed());
    }
    for reference in favorites {
        println!("{} {}", "★".yellow(), reference);
    }
    Ok(())
}

fn cmd_recent(ctx: &Context) -> CliResult {
    let recent = ctx.state()?.recent_verses()?;
    if recent.is_empty() {
        println!("{}", "No recent verses".dimmed());
    }
    for verse in recent {
        println!("{}", verse.reference.cyan().bold());
        println!("  {}", verse.text);
    }
    Ok(())
}

fn cmd_history(ctx: &Context, show: Option<usize>, clear: bool) -> CliResult {
    let state = ctx.state()?;

    if clear {
        state.clear_history()?;
        println!("{}", "History cleared".green());
        return Ok(());
    }

    if let Some(position) = show {
        let entry = history_entry(&state, position)?;
        println!("{}", entry.title.cyan().bold());
        println!("{}", entry.content);
        return Ok(());
    }

    let history = state.history()?;
    if history.is_empty() {
        println!("{}", "No history yet".dimmed());
    }
    for (i, entry) in history.iter().enumerate() {
        println!(
            "{:>2}. {}  {}  {}",
            i + 1,
            entry.title.bold(),
            entry.content_type.label().dimmed(),
            entry.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
    }
    Ok(())
}

fn history_entry(state: &LocalState, position: usize) -> Result<HistoryEntry, Box<dyn std::error::Error>> {
    let history = state.history()?;
    position
        .checked_sub(1)
        .and_then(|i| history.into_iter().nth(i))
        .ok_or_else(|| format!("no history entry at position {}", position).into())
}

fn cmd_draft(ctx: &Context, action: DraftAction) -> CliResult {
    let state = ctx.state()?;
    match action {
        DraftAction::Show => match state.draft()? {
            Some(draft) => {
                println!(
                    "{} {}",
                    draft.title.cyan().bold(),
                    draft.saved_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
                );
                println!("{}", draft.content);
            }
            None => println!("{}", "No draft saved".dimmed()),
        },
        DraftAction::Save {
            input,
            title,
            content_type,
        } => {
            let content = read_input(&input)?;
            state.save_draft(&Draft::new(title, content, content_type))?;
            println!("{}", "Draft saved".green());
        }
        DraftAction::Clear => {
            if state.clear_draft()? {
                println!("{}", "Draft discarded".green());
            } else {
                println!("{}", "No draft saved".dimmed());
            }
        }
    }
    Ok(())
}

fn cmd_templates(ctx: &Context, action: TemplateAction) -> CliResult {
    let state = ctx.state()?;
    match action {
        TemplateAction::List => {
            let templates = state.templates()?;
            if templates.is_empty() {
                println!("{}", "No templates saved".dimmed());
            }
            for template in templates {
                println!(
                    "{}  {}: {}",
                    template.name.bold(),
                    template.request.content_type.label().dimmed(),
                    template.request.topic
                );
            }
        }
        TemplateAction::Save {
            name,
            topic,
            content_type,
            scripture,
            audience,
            service_time,
        } => {
            let mut request = GenerationRequest::new(content_type, topic).with_audience(audience);
            if let Some(scripture) = scripture {
                request = request.with_scripture(scripture);
            }
            if let Some(time) = service_time {
                request = request.with_service_time(time);
            }
            state.save_template(SavedTemplate::new(name.clone(), request))?;
            println!("{} {}", "Saved template".green(), name);
        }
        TemplateAction::Delete { name } => {
            if !state.delete_template(&name)? {
                return Err(format!("no template named {}", name).into());
            }
            println!("{} {}", "Deleted template".green(), name);
        }
        TemplateAction::Use { name, format } => {
            let template = state
                .template(&name)?
                .ok_or_else(|| format!("no template named {}", name))?;
            return cmd_generate(ctx, &template.request, format, None, true);
        }
    }
    Ok(())
}

enum ExportSource {
    File {
        path: PathBuf,
        title: Option<String>,
        content_type: ContentType,
    },
    History(usize),
    Draft,
}

fn cmd_export(
    ctx: &Context,
    source: ExportSource,
    theme: Theme,
    toc: bool,
    output: Option<&Path>,
) -> CliResult {
    let doc = match source {
        ExportSource::File {
            path,
            title,
            content_type,
        } => {
            let content = read_input(&path)?;
            let title = title.unwrap_or_else(|| default_title(&path, &content));
            ContentDocument::new(title, content, content_type, GenerationStatus::Success)
        }
        ExportSource::History(position) => history_entry(&ctx.state()?, position)?.document(),
        ExportSource::Draft => {
            let draft = ctx.state()?.draft()?.ok_or("no draft saved")?;
            ContentDocument::new(
                draft.title,
                draft.content,
                draft.content_type,
                GenerationStatus::Success,
            )
        }
    };

    let options = PrintOptions::new().with_theme(theme).with_toc(toc);
    let html = pulpit::to_print_html(&doc, &options)?;

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(format!("{}.html", export_stem(&doc.title))));
    fs::write(&path, &html)?;
    println!("{} {}", "Saved to".green(), path.display());
    Ok(())
}

/// Title for exported content: the first heading, or the file stem.
fn default_title(path: &Path, content: &str) -> String {
    let parsed = pulpit::parse(content);
    match parsed.title() {
        Some(heading) => heading.text.clone(),
        None => path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string()),
    }
}

fn export_stem(title: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        "export".to_string()
    } else {
        slug
    }
}

fn report_status(response: &GenerationResponse) {
    if response.status == GenerationStatus::Demo {
        eprintln!(
            "{}",
            "Showing demo content (set AI_API_KEY to generate)".yellow()
        );
    }
}

fn render_content(
    content: &str,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        OutputFormat::Markdown => content.to_string(),
        OutputFormat::Html => pulpit::to_html(content, options)?,
        OutputFormat::Text => pulpit::to_text(content, options)?,
        OutputFormat::Json => pulpit::to_json(content, JsonFormat::Pretty)?,
    })
}

fn read_input(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

fn write_output(content: &str, output: Option<&Path>) -> CliResult {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pulpit".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Church content generation and formatting tool");
    println!();
    println!("Repository: {}", "https://github.com/pulpit-rs/pulpit".dimmed());
    println!("License: MIT");
}
