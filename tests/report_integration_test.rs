use anyhow::Result;
use numero_grid::{CsvReportPipeline, LocalStorage, NumerologyError, ReportConfig, ReportEngine};
use tempfile::TempDir;

const PEOPLE: &str = "\
name,birth_date
Bob,05/11/1991
A,
Leap Baby,29/02/2024
Not A Date,29/02/2023
";

fn config_for(output_formats: &str, extra: &str) -> Result<ReportConfig> {
    let content = format!(
        r#"
[report]
name = "integration"
version = "1.0.0"

[source]
path = "people.csv"

[load]
output_path = "out"
output_formats = {}

{}
"#,
        output_formats, extra
    );
    Ok(ReportConfig::from_toml_str(&content)?)
}

#[tokio::test]
async fn test_end_to_end_report_writes_csv_and_json() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("people.csv"), PEOPLE).await?;

    let config = config_for(r#"["csv", "json"]"#, "")?;
    let pipeline = CsvReportPipeline::new(LocalStorage::new(temp_dir.path()), config);
    let output_path = ReportEngine::new(pipeline).run().await?;
    assert_eq!(output_path, "out/report.csv");

    let csv = tokio::fs::read_to_string(temp_dir.path().join("out/report.csv")).await?;
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>()?;
    assert_eq!(rows.len(), 4);

    assert_eq!(&rows[0][0], "Bob");
    assert_eq!(&rows[0][2], "1");
    assert_eq!(&rows[0][4], "11");
    assert_eq!(&rows[0][7], "1 5 9");

    assert_eq!(&rows[1][0], "A");
    assert_eq!(&rows[1][6], "");

    assert_eq!(&rows[2][5], "29/02/2024");
    assert_eq!(&rows[2][10], "");

    assert_eq!(&rows[3][6], "");
    assert!(rows[3][10].contains("29/02/2023"));

    let json: serde_json::Value =
        serde_json::from_str(&tokio::fs::read_to_string(temp_dir.path().join("out/report.json")).await?)?;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(
        entries[0]["grid"]["missing_numbers"],
        serde_json::json!([2, 3, 4, 6, 7, 8])
    );
    assert!(entries[3].get("date_error").is_some());

    Ok(())
}

#[tokio::test]
async fn test_skip_policy_omits_invalid_rows() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("people.csv"), PEOPLE).await?;

    let config = config_for(
        r#"["json"]"#,
        "[error_handling]\non_invalid_date = \"skip\"",
    )?;
    let pipeline = CsvReportPipeline::new(LocalStorage::new(temp_dir.path()), config);
    let output_path = ReportEngine::new(pipeline).run().await?;
    assert_eq!(output_path, "out/report.json");
    assert!(!temp_dir.path().join("out/report.csv").exists());

    let json: serde_json::Value =
        serde_json::from_str(&tokio::fs::read_to_string(temp_dir.path().join(&output_path)).await?)?;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["numerology"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Bob", "A", "Leap Baby"]);

    Ok(())
}

#[tokio::test]
async fn test_fail_policy_stops_before_writing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("people.csv"), PEOPLE).await?;

    let config = config_for(
        r#"["csv"]"#,
        "[error_handling]\non_invalid_date = \"fail\"",
    )?;
    let pipeline = CsvReportPipeline::new(LocalStorage::new(temp_dir.path()), config);
    let err = ReportEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, NumerologyError::InvalidDate { .. }));
    assert!(!temp_dir.path().join("out/report.csv").exists());

    Ok(())
}

#[tokio::test]
async fn test_missing_input_file_is_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let config = config_for(r#"["csv"]"#, "")?;
    let pipeline = CsvReportPipeline::new(LocalStorage::new(temp_dir.path()), config);
    let err = ReportEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, NumerologyError::IoError(_)));
    Ok(())
}

#[tokio::test]
async fn test_custom_columns_and_delimiter() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(
        temp_dir.path().join("people.csv"),
        "id;full_name;dob\n1;Bob;1991-11-05\n",
    )
    .await?;

    let content = r#"
[report]
name = "custom"

[source]
path = "people.csv"
delimiter = ";"
name_field = "full_name"
birth_date_field = "dob"

[load]
output_path = "custom-out"
output_formats = ["csv"]

[load.filenames]
csv = "numbers.csv"
"#;
    let config = ReportConfig::from_toml_str(content)?;
    let pipeline = CsvReportPipeline::new(LocalStorage::new(temp_dir.path()), config);
    let output_path = ReportEngine::new(pipeline).run().await?;
    assert_eq!(output_path, "custom-out/numbers.csv");

    let csv = tokio::fs::read_to_string(temp_dir.path().join(&output_path)).await?;
    assert!(csv.lines().nth(1).unwrap().starts_with("Bob,10,1,11,11,05/11/1991,"));

    Ok(())
}
