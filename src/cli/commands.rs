//! Command implementations for the Goldpan CLI.

use crate::analyzer::KeywordAnalyzer;
use crate::cli::args::{AnalyzeArgs, CollectArgs, Command, GoldpanArgs, SuggestArgs};
use crate::cli::output::{
    CollectionOutput, SuggestionOutput, output_analysis, output_collection, output_suggestions,
};
use crate::collector::{CollectOptions, KeywordCollector};
use crate::config::Credentials;
use crate::error::{GoldpanError, Result};
use crate::provider::{AutocompleteClient, SearchClient};
use crate::report::{KeywordReport, save_report};

/// Setup instructions shown when a credentialed command starts without
/// API credentials.
const SETUP_GUIDE: &str = "Naver search API credentials are required.

  1. Register an application at https://developers.naver.com
  2. Enable the search API for it
  3. Pass the issued Client ID and Client Secret via
     --client-id/--client-secret, the NAVER_BLOG_CLIENT_ID and
     NAVER_BLOG_CLIENT_SECRET environment variables, or the config file
     (default: config/keyword_config.json)";

/// Execute a CLI command.
pub async fn execute_command(args: GoldpanArgs) -> Result<()> {
    match &args.command {
        Command::Collect(collect_args) => collect_keywords(collect_args.clone(), &args).await,
        Command::Analyze(analyze_args) => analyze_keyword(analyze_args.clone(), &args).await,
        Command::Suggest(suggest_args) => suggest_keywords(suggest_args.clone(), &args).await,
    }
}

/// Resolve credentials from flags, environment, and the config file, and
/// fail fast with setup guidance when they are absent.
fn credentialed_client(cli_args: &GoldpanArgs) -> Result<SearchClient> {
    let credentials = Credentials::resolve(
        cli_args.client_id.clone(),
        cli_args.client_secret.clone(),
        &cli_args.config,
    );

    if !credentials.is_configured() {
        return Err(GoldpanError::config(SETUP_GUIDE));
    }

    Ok(SearchClient::new(credentials))
}

/// Expand seed keywords and rate every candidate found.
async fn collect_keywords(args: CollectArgs, cli_args: &GoldpanArgs) -> Result<()> {
    let search = credentialed_client(cli_args)?;
    let collector = KeywordCollector::new(search, AutocompleteClient::new());

    if cli_args.verbosity() > 0 {
        println!(
            "Collecting keywords from {} seed(s), analyzing up to {}...",
            args.seeds.len(),
            args.max_keywords
        );
    }

    let options = CollectOptions {
        max_keywords: args.max_keywords,
        golden_threshold: args.golden_threshold,
    };
    let summaries = collector.collect(&args.seeds, &options).await?;

    let report = KeywordReport::new(args.seeds[0].clone(), summaries);
    let report_file = if args.should_save() {
        Some(save_report(&report, &args.output_dir)?)
    } else {
        None
    };

    output_collection(
        &CollectionOutput {
            report,
            report_file,
        },
        args.top,
        cli_args,
    )
}

/// Deep-dive a single keyword.
async fn analyze_keyword(args: AnalyzeArgs, cli_args: &GoldpanArgs) -> Result<()> {
    let search = credentialed_client(cli_args)?;
    let analyzer = KeywordAnalyzer::new(search, AutocompleteClient::new());

    if cli_args.verbosity() > 1 {
        println!("Analyzing '{}'...", args.keyword);
    }

    let analysis = analyzer
        .analyze(&args.keyword, &args.analysis_options())
        .await?;

    output_analysis(&analysis, cli_args)
}

/// Look up autocomplete suggestions. Needs no credentials.
async fn suggest_keywords(args: SuggestArgs, cli_args: &GoldpanArgs) -> Result<()> {
    let client = AutocompleteClient::new();
    let suggestions = client.suggestions(&args.keyword, args.limit).await;

    output_suggestions(
        &SuggestionOutput {
            keyword: args.keyword,
            suggestions,
        },
        cli_args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::OutputFormat;
    use std::path::PathBuf;

    fn args_with_credentials(
        client_id: Option<&str>,
        client_secret: Option<&str>,
    ) -> GoldpanArgs {
        GoldpanArgs {
            verbose: 0,
            quiet: true,
            output_format: OutputFormat::Human,
            pretty: false,
            client_id: client_id.map(str::to_string),
            client_secret: client_secret.map(str::to_string),
            config: PathBuf::from("does/not/exist.json"),
            command: Command::Suggest(SuggestArgs {
                keyword: "캠핑".to_string(),
                limit: 10,
            }),
        }
    }

    #[test]
    fn test_credentialed_client_requires_both_values() {
        let err = credentialed_client(&args_with_credentials(None, None)).unwrap_err();
        assert!(err.to_string().contains("developers.naver.com"));

        let err = credentialed_client(&args_with_credentials(Some("id"), None)).unwrap_err();
        assert!(matches!(err, GoldpanError::Config(_)));
    }

    #[test]
    fn test_credentialed_client_accepts_explicit_flags() {
        let client =
            credentialed_client(&args_with_credentials(Some("id"), Some("secret"))).unwrap();
        assert!(client.is_configured());
    }
}
