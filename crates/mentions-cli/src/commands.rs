use anyhow::Result;
use comfy_table::Table;

use mentions_cli::analysis::journal_with_most_drugs;
use mentions_cli::pipeline::{RunConfig, run_pipeline};
use mentions_cli::types::RunResult;
use mentions_model::{
    CleanConfig, clinical_clean_config, drugs_clean_config, pubmed_clean_config,
};

use crate::cli::{AnalyzeArgs, RunArgs};
use crate::summary::apply_table_style;

pub fn run_matching(args: &RunArgs) -> Result<RunResult> {
    let config = RunConfig {
        drugs_csv: args.drugs.clone(),
        pubmed_csv: args.pubmed_csv.clone(),
        pubmed_json: args.pubmed_json.clone(),
        clinical_csv: args.clinical_trials.clone(),
        output: args.output.clone(),
    };
    run_pipeline(&config)
}

pub fn run_sources() {
    let mut table = Table::new();
    table.set_header(vec![
        "Source",
        "Id prefix",
        "Date columns",
        "Required columns",
        "Searched text",
    ]);
    apply_table_style(&mut table);
    for (source, config) in [
        ("drugs", drugs_clean_config()),
        ("pubmed", pubmed_clean_config()),
        ("clinical", clinical_clean_config()),
    ] {
        table.add_row(source_row(source, &config));
    }
    println!("{table}");
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    match journal_with_most_drugs(&args.report)? {
        Some(analysis) => {
            let drugs: Vec<&str> = analysis.drugs.iter().map(String::as_str).collect();
            println!("Journal: {}", analysis.journal);
            println!("Distinct drugs ({}): {}", drugs.len(), drugs.join(", "));
        }
        None => println!("No journal mentions found in {}", args.report.display()),
    }
    Ok(())
}

fn source_row(source: &str, config: &CleanConfig) -> Vec<String> {
    vec![
        source.to_string(),
        config.id_prefix.clone(),
        join_or_dash(&config.date_columns),
        join_or_dash(&config.drop_na_columns),
        join_or_dash(&config.text_search_columns),
    ]
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}
