mod config;
mod diagnostics;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use fs_err as fs;
use manifix_actions::{CodeActionProvider, FixContext, InMemoryDocument};
use manifix_analytics::{AnalyticsClient, AnalyticsConfig, TracingSink};
use manifix_edit::{apply_all, render_patch};
use manifix_package::{
    ANDROID_PACKAGE_ENDPOINT, AndroidOptionsInput, HttpPackagingService, PackagingService,
    WINDOWS_PACKAGE_ENDPOINT, advanced_android_defaults, android_options, publisher_msix,
    simple_msix,
};
use manifix_types::manifest::WebManifest;
use manifix_types::text::{Position, TextRange};
use std::collections::BTreeMap;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "manifix",
    version,
    about = "Quick fixes and store packaging for web app manifests."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve fixes for validator diagnostics against a manifest (default: dry-run).
    Fix(FixArgs),
    /// List the manifest members the fix engine knows how to repair.
    Rules(RulesArgs),
    /// Build store packaging requests and optionally send them.
    #[command(subcommand)]
    Package(PackageCommand),
}

#[derive(Debug, Parser)]
struct FixArgs {
    /// Path to the manifest JSON document.
    #[arg(long)]
    manifest: Utf8PathBuf,

    /// Path to a diagnostics JSON file (envelope or bare array).
    #[arg(long)]
    diagnostics: Utf8PathBuf,

    /// Write the fixed manifest back to disk. If omitted, only a patch
    /// preview is printed.
    #[arg(long, default_value_t = false)]
    apply: bool,
}

#[derive(Debug, Parser)]
struct RulesArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum PackageCommand {
    /// Build a Windows MSIX generation request.
    Windows(WindowsArgs),
    /// Build a CloudAPK (Android) generation request.
    Android(AndroidArgs),
}

#[derive(Debug, Parser)]
struct WindowsArgs {
    /// URL of the deployed app.
    #[arg(long)]
    url: String,

    /// App name.
    #[arg(long)]
    name: String,

    /// Store package id. Enables the signed, store-ready request shape;
    /// requires the publisher flags.
    #[arg(long, requires = "publisher_display_name", requires = "publisher_common_name")]
    package_id: Option<String>,

    #[arg(long)]
    version: Option<String>,

    #[arg(long)]
    classic_version: Option<String>,

    #[arg(long)]
    publisher_display_name: Option<String>,

    #[arg(long)]
    publisher_common_name: Option<String>,

    /// Write the request JSON (or, with --send, the package bytes) here
    /// instead of stdout.
    #[arg(long)]
    out: Option<Utf8PathBuf>,

    /// Post the request to the packaging service.
    #[arg(long, default_value_t = false, requires = "out")]
    send: bool,
}

#[derive(Debug, Parser)]
struct AndroidArgs {
    /// URL of the deployed app.
    #[arg(long)]
    app_url: Option<String>,

    /// URL the manifest is served from.
    #[arg(long)]
    manifest_url: Option<String>,

    /// Android package id, e.g. "com.myapp.pwa".
    #[arg(long)]
    package_id: Option<String>,

    /// App version (defaults to "1.0.0.0").
    #[arg(long)]
    version: Option<String>,

    /// Local copy of the manifest to derive options from.
    #[arg(long)]
    manifest: Option<Utf8PathBuf>,

    /// Emit the full advanced-settings template instead of deriving options.
    #[arg(long, default_value_t = false)]
    advanced: bool,

    /// Write the request JSON (or, with --send, the package bytes) here
    /// instead of stdout.
    #[arg(long)]
    out: Option<Utf8PathBuf>,

    /// Post the request to the packaging service.
    #[arg(long, default_value_t = false, requires = "out")]
    send: bool,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        eprintln!("error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Fix(args) => cmd_fix(args),
        Command::Rules(args) => cmd_rules(args),
        Command::Package(PackageCommand::Windows(args)) => cmd_package_windows(args),
        Command::Package(PackageCommand::Android(args)) => cmd_package_android(args),
    }
}

fn analytics_for(dir: &Utf8Path) -> anyhow::Result<AnalyticsClient> {
    let file_config = config::load_or_default(dir).context("load manifix.toml config")?;
    Ok(AnalyticsClient::init(
        AnalyticsConfig {
            enabled: file_config.analytics.enabled,
        },
        Box::new(TracingSink),
    ))
}

fn cmd_fix(args: FixArgs) -> anyhow::Result<()> {
    let manifest_dir = args
        .manifest
        .parent()
        .map(Utf8Path::to_path_buf)
        .unwrap_or_else(|| Utf8PathBuf::from("."));
    let mut analytics = analytics_for(&manifest_dir)?;

    let text = fs::read_to_string(&args.manifest)
        .with_context(|| format!("read manifest {}", args.manifest))?;
    let diags = diagnostics::load_diagnostics(&args.diagnostics)?;

    let document = InMemoryDocument::new(&text);
    let provider = CodeActionProvider::new();
    let fixes = provider.provide(
        &document,
        TextRange::at(Position::new(0, 0)),
        &FixContext { diagnostics: diags },
    );

    if fixes.is_empty() {
        println!("no fixes offered");
        return Ok(());
    }

    for fix in &fixes {
        println!("fix: {} ({} edit(s))", fix.label, fix.edits.len());
    }

    let fixed = apply_all(&text, &fixes).context("apply fixes")?;
    let patch = render_patch(&text, &fixed);
    println!("{patch}");

    if args.apply {
        fs::write(&args.manifest, &fixed)
            .with_context(|| format!("write manifest {}", args.manifest))?;
        info!(manifest = %args.manifest, fixes = fixes.len(), "wrote fixed manifest");
    }

    analytics.track_event(
        "fix.resolved",
        BTreeMap::from([
            ("fixes".to_string(), fixes.len().to_string()),
            ("applied".to_string(), args.apply.to_string()),
        ]),
    );
    analytics.shutdown();
    Ok(())
}

fn cmd_rules(args: RulesArgs) -> anyhow::Result<()> {
    match args.format {
        OutputFormat::Text => {
            println!("Repairable manifest members:\n");
            println!("  {:<20} {:<10} DEFAULT", "MEMBER", "SHAPE");
            println!("  {:<20} {:<10} -------", "------", "-----");
            for rule in manifix_rules::FIELD_RULES {
                println!(
                    "  {:<20} {:<10} {}",
                    rule.member, rule.shape, rule.default_value
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(manifix_rules::FIELD_RULES)?);
        }
    }
    Ok(())
}

fn cmd_package_windows(args: WindowsArgs) -> anyhow::Result<()> {
    let mut analytics = analytics_for(Utf8Path::new("."))?;

    let info = match &args.package_id {
        Some(package_id) => publisher_msix(
            &args.url,
            &args.name,
            package_id,
            args.version.as_deref(),
            args.classic_version.as_deref(),
            args.publisher_display_name.as_deref().unwrap_or_default(),
            args.publisher_common_name.as_deref().unwrap_or_default(),
        ),
        None => simple_msix(&args.url, &args.name),
    };

    if args.send {
        let out = args.out.as_ref().context("--out is required with --send")?;
        let service = packaging_service()?;
        let bytes = block_on(service.generate_msix(&info))?.context("generate msix package")?;
        fs::write(out, &bytes).with_context(|| format!("write {out}"))?;
        info!(out = %out, bytes = bytes.len(), "wrote msix package");
    } else {
        emit_json(&info, args.out.as_deref())?;
    }

    analytics.track_event(
        "package.windows",
        BTreeMap::from([("sent".to_string(), args.send.to_string())]),
    );
    analytics.shutdown();
    Ok(())
}

fn cmd_package_android(args: AndroidArgs) -> anyhow::Result<()> {
    let mut analytics = analytics_for(Utf8Path::new("."))?;

    let options = if args.advanced {
        advanced_android_defaults()
    } else {
        let manifest_path = args
            .manifest
            .as_ref()
            .context("--manifest is required unless --advanced is set")?;
        let app_url = args
            .app_url
            .as_ref()
            .context("--app-url is required unless --advanced is set")?;
        let manifest_url = args
            .manifest_url
            .as_ref()
            .context("--manifest-url is required unless --advanced is set")?;
        let package_id = args
            .package_id
            .as_ref()
            .context("--package-id is required unless --advanced is set")?;

        let contents = fs::read_to_string(manifest_path)
            .with_context(|| format!("read manifest {manifest_path}"))?;
        let manifest: WebManifest =
            serde_json::from_str(&contents).with_context(|| format!("parse {manifest_path}"))?;

        android_options(
            &AndroidOptionsInput {
                app_url: app_url.clone(),
                manifest_url: manifest_url.clone(),
                package_id: package_id.clone(),
                version: args.version.clone(),
            },
            &manifest,
        )?
    };

    if args.send {
        let out = args.out.as_ref().context("--out is required with --send")?;
        let service = packaging_service()?;
        let bytes =
            block_on(service.generate_android(&options))?.context("generate android package")?;
        fs::write(out, &bytes).with_context(|| format!("write {out}"))?;
        info!(out = %out, bytes = bytes.len(), "wrote android package");
    } else {
        emit_json(&options, args.out.as_deref())?;
    }

    analytics.track_event(
        "package.android",
        BTreeMap::from([
            ("sent".to_string(), args.send.to_string()),
            ("advanced".to_string(), args.advanced.to_string()),
        ]),
    );
    analytics.shutdown();
    Ok(())
}

fn packaging_service() -> anyhow::Result<HttpPackagingService> {
    let file_config = config::load_or_default(Utf8Path::new(".")).context("load config")?;
    Ok(HttpPackagingService::new(
        file_config
            .package
            .msix_endpoint
            .unwrap_or_else(|| WINDOWS_PACKAGE_ENDPOINT.to_string()),
        file_config
            .package
            .android_endpoint
            .unwrap_or_else(|| ANDROID_PACKAGE_ENDPOINT.to_string()),
    ))
}

fn block_on<F: Future>(fut: F) -> anyhow::Result<F::Output> {
    let runtime = tokio::runtime::Runtime::new().context("build tokio runtime")?;
    Ok(runtime.block_on(fut))
}

fn emit_json<T: serde::Serialize>(value: &T, out: Option<&Utf8Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize request")?;
    match out {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("write {path}"))?;
            info!(out = %path, "wrote packaging request");
        }
        None => println!("{json}"),
    }
    Ok(())
}
