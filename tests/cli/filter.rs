use anyhow::Result;

use crate::{CliTest, id, run};

const CATALOG: &str = "app/src/main/res/values/strings.xml";

#[test]
fn test_prefix_rule_excludes_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("filterlist.txt", "# test helpers\n--Test\n")?;
    test.write_file("app/src/main/java/TestUtils.java", "log(\"测试\");\n")?;
    test.write_file("app/src/main/java/Main.java", "show(\"主页\");\n")?;

    let (output, stdout, _) = run(test.extract_command())?;
    assert!(output.status.success());
    assert!(stdout.contains("Scanned 1 file(s)"));

    assert_eq!(
        test.read_file("app/src/main/java/TestUtils.java")?,
        "log(\"测试\");\n"
    );
    let catalog = test.read_file(CATALOG)?;
    assert!(!catalog.contains("测试"));
    assert!(catalog.contains(&id("Main", 0)));
    Ok(())
}

#[test]
fn test_directory_rule_prunes_at_any_depth() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("filterlist.txt", "**generated\n")?;
    test.write_file("app/src/main/java/generated/Gen.java", "a(\"生成\");\n")?;
    test.write_file("app/src/main/java/Main.java", "b(\"主页\");\n")?;

    let (output, _, _) = run(test.extract_command())?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("app/src/main/java/generated/Gen.java")?,
        "a(\"生成\");\n"
    );
    assert!(!test.read_file(CATALOG)?.contains("生成"));
    Ok(())
}

#[test]
fn test_exact_name_rule() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("filterlist.txt", "BuildConfig\n")?;
    test.write_file("app/src/main/java/BuildConfig.java", "a(\"构建\");\n")?;
    test.write_file("app/src/main/java/MyBuildConfig.java", "b(\"构建\");\n")?;

    let (output, _, _) = run(test.extract_command())?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("app/src/main/java/BuildConfig.java")?,
        "a(\"构建\");\n"
    );
    assert_eq!(
        test.read_file("app/src/main/java/MyBuildConfig.java")?,
        format!("b(getString(R.string.{}));\n", id("MyBuildConfig", 0))
    );
    Ok(())
}

#[test]
fn test_explicit_filter_list() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("config/rules.txt", "--Debug\n")?;
    test.write_file("app/src/main/java/DebugPanel.java", "a(\"调试\");\n")?;

    let mut cmd = test.extract_command();
    cmd.arg("--filter-list").arg("config/rules.txt");

    let (output, stdout, _) = run(cmd)?;
    assert!(output.status.success());
    assert!(stdout.contains("Scanned 0 file(s)"));
    Ok(())
}

#[test]
fn test_filter_list_from_environment() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("rules.txt", "--Debug\n")?;
    test.write_file("app/src/main/java/DebugPanel.java", "a(\"调试\");\n")?;

    let mut cmd = test.extract_command();
    cmd.env("EXTRES_FILTER_LIST", "rules.txt");

    let (output, stdout, _) = run(cmd)?;
    assert!(output.status.success());
    assert!(stdout.contains("Scanned 0 file(s)"));
    Ok(())
}

#[test]
fn test_missing_explicit_filter_list_is_fatal() -> Result<()> {
    let test = CliTest::with_file("app/src/main/java/A.java", "a(\"好\");\n")?;

    let mut cmd = test.extract_command();
    cmd.arg("--filter-list").arg("nope.txt");

    let (output, _, stderr) = run(cmd)?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Error: Filter list not found: nope.txt"));
    assert_eq!(test.read_file("app/src/main/java/A.java")?, "a(\"好\");\n");
    Ok(())
}

#[test]
fn test_verbose_notes_missing_filter_list() -> Result<()> {
    let test = CliTest::with_file("app/src/main/java/A.java", "a(\"好\");\n")?;

    let mut cmd = test.extract_command();
    cmd.arg("-v");

    let (output, _, stderr) = run(cmd)?;
    assert!(output.status.success());
    assert!(stderr.contains("no filter list found"));
    assert!(stderr.contains("Scanning ./app/src/main/java/A.java"));
    Ok(())
}
