use std::io;

use anyhow::Result;
use tracing::info;

use tabgen_cli::pipeline::{ConvertSummary, convert, convert_path, emit, emit_to_path};
use tabgen_model::TableConfig;
use tabgen_output::{SystemClock, serial_number};

use crate::cli::TableArgs;

fn table_config(args: &TableArgs) -> TableConfig {
    TableConfig {
        icon: args.icon.clone(),
        author: args.author.clone(),
        description: args.description.clone(),
        uuid: args.uuid.clone(),
        auto_select: args.auto_select.into(),
        expand_quirks: !args.no_quirks,
    }
}

pub fn run_convert(args: &TableArgs) -> Result<ConvertSummary> {
    let config = table_config(args);
    let serial = args
        .serial
        .clone()
        .unwrap_or_else(|| serial_number(&SystemClock));

    let document = match &args.input {
        Some(path) => convert_path(path, &config, &serial)?,
        None => convert(io::stdin().lock(), &config, &serial)?,
    };

    match &args.output {
        Some(path) => emit_to_path(&document, path)?,
        None => emit(&document, io::stdout().lock())?,
    }

    let summary = ConvertSummary::from_document(&document);
    info!(
        source_rows = summary.source_rows,
        quirk_rows = summary.quirk_rows,
        max_key_length = summary.max_key_length,
        serial_number = %summary.serial_number,
        "conversion complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use tabgen_model::AutoSelect;

    use super::*;
    use crate::cli::Cli;

    fn table_args(extra: &[&str]) -> TableArgs {
        let mut argv = vec!["csv-to-ibus"];
        argv.extend_from_slice(extra);
        Cli::try_parse_from(argv).unwrap().table
    }

    fn table_body(rendered: &str) -> Vec<&str> {
        rendered
            .lines()
            .skip_while(|line| *line != "BEGIN_TABLE")
            .skip(1)
            .take_while(|line| *line != "END_TABLE")
            .collect()
    }

    #[test]
    fn flags_map_onto_table_config() {
        let args = table_args(&[
            "--no-quirks",
            "--auto-select",
            "false",
            "--serial",
            "202405060708",
            "--icon",
            "chr.svg",
            "--author",
            "Someone <someone@example.org>",
            "--description",
            "Cherokee test table",
            "--uuid",
            "00000000-0000-0000-0000-000000000000",
        ]);
        let config = table_config(&args);

        assert_eq!(
            config,
            TableConfig {
                icon: "chr.svg".to_string(),
                author: "Someone <someone@example.org>".to_string(),
                description: "Cherokee test table".to_string(),
                uuid: "00000000-0000-0000-0000-000000000000".to_string(),
                auto_select: AutoSelect::Disabled,
                expand_quirks: false,
            }
        );
        assert_eq!(args.serial.as_deref(), Some("202405060708"));
    }

    #[test]
    fn default_flags_match_default_config() {
        assert_eq!(table_config(&table_args(&[])), TableConfig::default());
    }

    #[test]
    fn run_convert_reads_input_and_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("chr.csv");
        let output = dir.path().join("chr.txt");
        fs::write(&input, "transliteration,character,frequency\na,Ꭰ,1\nha,Ꭽ,1\n").unwrap();

        let args = table_args(&[
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--serial",
            "202401020304",
        ]);
        let summary = run_convert(&args).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(
            table_body(&written),
            vec!["a\tᎠ\t1", "ha\tᎭ\t1", "naha\t\u{13be}Ꭽ\t1"]
        );
        assert!(written.contains("SERIAL_NUMBER = 202401020304\n"));
        assert!(written.contains("AUTO_SELECT = TRUE\n"));
        assert_eq!(summary.source_rows, 2);
        assert_eq!(summary.quirk_rows, 1);
    }

    #[test]
    fn run_convert_honours_no_quirks_and_auto_select() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("chr.csv");
        let output = dir.path().join("chr.txt");
        fs::write(&input, "transliteration,character\na,Ꭰ\nha,Ꭽ\n").unwrap();

        let args = table_args(&[
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--no-quirks",
            "--auto-select",
            "false",
        ]);
        let summary = run_convert(&args).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(table_body(&written), vec!["a\tᎠ\t1", "ha\tᎭ\t1"]);
        assert!(written.contains("AUTO_SELECT = FALSE\n"));
        assert!(written.contains("MAX_KEY_LENGTH = 2\n"));
        assert_eq!(summary.serial_number.len(), 12);
    }

    #[test]
    fn malformed_input_fails_without_creating_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("chr.csv");
        let output = dir.path().join("chr.txt");
        fs::write(&input, "transliteration,frequency\na,1\n").unwrap();

        let args = table_args(&[
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);
        let err = run_convert(&args).unwrap_err();

        assert!(format!("{err:#}").contains("'character'"));
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_file_fails_without_creating_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("absent.csv");
        let output = dir.path().join("chr.txt");

        let args = table_args(&[
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ]);
        let err = run_convert(&args).unwrap_err();

        assert!(format!("{err:#}").contains("absent.csv"));
        assert!(!output.exists());
    }
}
