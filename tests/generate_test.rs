//! End-to-end generation tests
//!
//! These drive `generate()` over a fixture model into a temp directory,
//! with the template and mapping resources supplied as override files so
//! the run never depends on anything outside the test sandbox.

use std::fs;
use std::path::{Path, PathBuf};

use pdm_codegen::{generate, CodegenBuilder, CodegenConfig};

const MODEL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Model xmlns:a="attribute" xmlns:c="collection" xmlns:o="object">
<o:RootObject Id="o1"><c:Children><o:Model Id="o2"><a:Name>Example</a:Name>
<c:Tables>
<o:Table Ref="o99"/>
<o:Table Id="o3">
  <a:Name>User</a:Name>
  <a:Code>T_USER</a:Code>
  <c:Columns>
    <o:Column Id="o4">
      <a:Name>Id</a:Name>
      <a:Code>ID</a:Code>
      <a:DataType>INT</a:DataType>
      <a:Mandatory>1</a:Mandatory>
    </o:Column>
    <o:Column Id="o5">
      <a:Name>Name</a:Name>
      <a:Code>NAME</a:Code>
      <a:DataType>VARCHAR(50)</a:DataType>
    </o:Column>
  </c:Columns>
  <c:Keys>
    <o:Key Id="o6">
      <a:Name>Key 1</a:Name>
      <a:Code>PK_USER</a:Code>
      <c:Key.Columns>
        <o:Column Ref="o4"/>
      </c:Key.Columns>
    </o:Key>
  </c:Keys>
</o:Table>
</c:Tables>
</o:Model></c:Children></o:RootObject>
</Model>"#;

/// Write the model plus minimal template/mapping resources into `dir` and
/// return a ready-to-run config generating into `dir/Code`.
fn fixture_config(dir: &Path) -> CodegenConfig {
    let model_path = dir.join("example.pdm");
    fs::write(&model_path, MODEL).unwrap();

    let class_template = dir.join("ClassTemplate.cs");
    fs::write(
        &class_template,
        "// {TableName}\npublic class {TableCode}\n{\n{Cols}}\n",
    )
    .unwrap();

    let property_template = dir.join("PropertyTemplate.cs");
    fs::write(
        &property_template,
        "    public {ColDataType} {ColCode} { get; set; } // {ColName}",
    )
    .unwrap();

    let type_mapping = dir.join("TypeMapping.txt");
    fs::write(&type_mapping, "# test mapping\nVARCHAR string?\nINT int?\n").unwrap();

    CodegenConfig {
        model_file: model_path,
        output_dir: dir.join("Code"),
        class_template: Some(class_template),
        property_template: Some(property_template),
        type_mapping: Some(type_mapping),
        ..Default::default()
    }
}

#[test]
fn generates_one_file_per_table() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture_config(dir.path());

    generate(&config).unwrap();

    let output = fs::read_to_string(dir.path().join("Code/T_USER.cs")).unwrap();
    assert_eq!(
        output,
        "// User\n\
         public class T_USER\n\
         {\n\
         \x20   public int ID { get; set; } // Id\n\
         \x20   public string? NAME { get; set; } // Name\n\
         }\n"
    );

    // The placeholder <o:Table Ref="o99"/> produced no output file
    let entries: Vec<_> = fs::read_dir(dir.path().join("Code"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, ["T_USER.cs"]);
}

#[test]
fn mandatory_column_renders_non_nullable() {
    let dir = tempfile::tempdir().unwrap();
    generate(&fixture_config(dir.path())).unwrap();

    let output = fs::read_to_string(dir.path().join("Code/T_USER.cs")).unwrap();
    // ID is mandatory: marker stripped; NAME stays nullable
    assert!(output.contains("public int ID"));
    assert!(output.contains("public string? NAME"));
}

#[test]
fn unresolved_key_reference_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = fixture_config(dir.path());

    let broken = MODEL.replace(r#"<o:Column Ref="o4"/>"#, r#"<o:Column Ref="o777"/>"#);
    let model_path = dir.path().join("broken.pdm");
    fs::write(&model_path, broken).unwrap();
    config.model_file = model_path;

    assert!(generate(&config).is_err());
    assert!(!dir.path().join("Code").exists());
}

#[test]
fn include_filter_limits_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = fixture_config(dir.path());

    let two_tables = MODEL.replace(
        "</c:Tables>",
        r#"<o:Table Id="o7"><a:Code>T_OTHER</a:Code></o:Table></c:Tables>"#,
    );
    let model_path = dir.path().join("two.pdm");
    fs::write(&model_path, two_tables).unwrap();
    config.model_file = model_path;
    config.include_tables = "T_OTHER".to_string();

    generate(&config).unwrap();

    assert!(!dir.path().join("Code/T_USER.cs").exists());
    assert!(dir.path().join("Code/T_OTHER.cs").exists());
}

#[test]
fn builder_generates_with_embedded_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("example.pdm");
    fs::write(&model_path, MODEL).unwrap();

    CodegenBuilder::new(&model_path)
        .output_dir(dir.path().join("Code"))
        .generate()
        .unwrap();

    let output = fs::read_to_string(dir.path().join("Code/T_USER.cs")).unwrap();
    assert!(output.contains("public class T_USER"));
    // Embedded mapping covers INT and VARCHAR(50)
    assert!(output.contains("public int ID"));
    assert!(output.contains("public string NAME"));
}

#[test]
fn dry_run_produces_no_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = fixture_config(dir.path());
    config.dry_run = true;

    generate(&config).unwrap();

    assert!(!dir.path().join("Code").exists());
}

#[test]
fn duplicate_table_codes_last_wins() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = fixture_config(dir.path());

    let duplicated = MODEL.replace(
        "</c:Tables>",
        r#"<o:Table Id="o8"><a:Name>Second</a:Name><a:Code>T_USER</a:Code></o:Table></c:Tables>"#,
    );
    let model_path = dir.path().join("dup.pdm");
    fs::write(&model_path, duplicated).unwrap();
    config.model_file = model_path;

    generate(&config).unwrap();

    let output = fs::read_to_string(dir.path().join("Code/T_USER.cs")).unwrap();
    assert!(output.starts_with("// Second\n"));
}

#[test]
fn missing_model_file_fails_validation() {
    let config = CodegenConfig::default_with_model(PathBuf::from("/no/such/model.pdm"));
    assert!(config.validate().is_err());
}
