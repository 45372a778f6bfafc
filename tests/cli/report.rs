use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_unscoped_literal_is_reported_and_left_alone() -> Result<()> {
    let test = CliTest::with_file("tools/Gen.java", "print(\"生成\");\n")?;

    let (output, stdout, _) = run(test.extract_command())?;
    assert!(output.status.success());

    assert!(stdout.contains("warning: \"生成\"  unscoped-literal"));
    assert!(stdout.contains("--> ./tools/Gen.java:1:7"));
    assert!(stdout.contains("1 problem(s) (0 errors, 1 warning)"));
    assert!(stdout.contains("No literals to extract"));
    assert_eq!(test.read_file("tools/Gen.java")?, "print(\"生成\");\n");
    Ok(())
}

#[test]
fn test_unescaped_markup_is_reported_and_written() -> Result<()> {
    let test = CliTest::with_file("app/src/main/java/A.java", "html(\"<b>加粗</b>\");\n")?;

    let (output, stdout, _) = run(test.extract_command())?;
    assert!(output.status.success());

    assert!(stdout.contains("unescaped-markup"));
    assert!(
        test.read_file("app/src/main/res/values/strings.xml")?
            .contains("><b>加粗</b></string>")
    );
    Ok(())
}

#[test]
fn test_unreadable_file_is_reported_and_skipped() -> Result<()> {
    let test = CliTest::new()?;
    test.write_bytes("app/src/main/java/Gbk.java", &[0x22, 0xc4, 0xe3, 0x22, 0x0a])?;
    test.write_file("app/src/main/java/Main.java", "a(\"好\");\n")?;

    let (output, stdout, _) = run(test.extract_command())?;
    assert!(output.status.success());

    assert!(stdout.contains("unreadable-file"));
    assert!(stdout.contains("--> ./app/src/main/java/Gbk.java"));
    assert!(stdout.contains("Replaced 1 literal(s) in 1 file(s)"));
    Ok(())
}

#[test]
fn test_timing_line_is_printed_unless_disabled() -> Result<()> {
    let test = CliTest::with_file("app/src/main/java/A.java", "a();\n")?;

    let (_, quiet, _) = run(test.extract_command())?;
    assert!(!quiet.contains("Costs:"));

    let mut cmd = test.extract_command();
    cmd.env_remove("EXTRES_DISABLE_TIMING");
    let (output, timed, _) = run(cmd)?;
    assert!(output.status.success());
    assert!(timed.lines().last().unwrap_or_default().starts_with("Costs: "));
    Ok(())
}
