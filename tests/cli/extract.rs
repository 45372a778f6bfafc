use anyhow::Result;

use crate::{CliTest, id, run};

const CATALOG: &str = "app/src/main/res/values/strings.xml";

#[test]
fn test_common_value_across_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "app/src/main/java/com/demo/A.java",
        "class A {\n    void a() {\n        toast(\"你好世界\");\n    }\n}\n",
    )?;
    test.write_file(
        "app/src/main/java/com/demo/B.java",
        "class B {\n    void b() { toast(\"你好世界\"); }\n}\n",
    )?;

    let (output, stdout, _) = run(test.extract_command())?;
    assert!(output.status.success());
    assert!(stdout.contains("Replaced 2 literal(s) in 2 file(s)"));

    let common_id = id("app_common", 0);
    let catalog = test.read_file(CATALOG)?;
    assert_eq!(
        catalog.matches(&format!("<string name=\"{}\">你好世界</string>", common_id)).count(),
        1
    );
    assert_eq!(catalog.matches("<string ").count(), 1);

    let reference = format!("getString(R.string.{})", common_id);
    assert_eq!(
        test.read_file("app/src/main/java/com/demo/A.java")?,
        format!("class A {{\n    void a() {{\n        toast({});\n    }}\n}}\n", reference)
    );
    assert_eq!(
        test.read_file("app/src/main/java/com/demo/B.java")?,
        format!("class B {{\n    void b() {{ toast({}); }}\n}}\n", reference)
    );
    Ok(())
}

#[test]
fn test_markup_attribute_becomes_unique_entry() -> Result<()> {
    let test = CliTest::with_file(
        "app/src/main/res/layout/main.xml",
        "<LinearLayout>\n    <Button\n        android:text=\"提交\" />\n</LinearLayout>\n",
    )?;

    let (output, _, _) = run(test.extract_command())?;
    assert!(output.status.success());

    let unique_id = id("main", 0);
    assert_eq!(
        test.read_file(CATALOG)?,
        format!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <resources>\n\
             \n\
             \t<string name=\"{}\">提交</string>\n\
             </resources>\n",
            unique_id
        )
    );
    assert_eq!(
        test.read_file("app/src/main/res/layout/main.xml")?,
        format!(
            "<LinearLayout>\n    <Button\n        android:text=\"@string/{}\" />\n</LinearLayout>\n",
            unique_id
        )
    );
    Ok(())
}

#[test]
fn test_unique_and_common_entries_in_one_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "app/src/main/java/Login.java",
        "title(\"登录\");\nhint(\"请输入\");\n",
    )?;
    test.write_file("app/src/main/java/Signup.java", "hint(\"请输入\");\n")?;

    let (output, stdout, _) = run(test.extract_command())?;
    assert!(output.status.success());
    assert!(stdout.contains("Wrote 2 entr(ies) to 1 catalog(s) (1 unique, 1 common)"));

    let catalog = test.read_file(CATALOG)?;
    let unique = format!("\t<string name=\"{}\">登录</string>\n", id("Login", 0));
    let common = format!("\t<string name=\"{}\">请输入</string>\n", id("app_common", 0));
    assert!(catalog.contains(&format!("\n{}\n{}", unique, common)));

    assert_eq!(
        test.read_file("app/src/main/java/Login.java")?,
        format!(
            "title(getString(R.string.{}));\nhint(getString(R.string.{}));\n",
            id("Login", 0),
            id("app_common", 0)
        )
    );
    Ok(())
}

#[test]
fn test_existing_catalog_is_preserved() -> Result<()> {
    let test = CliTest::new()?;
    let existing = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
                    <resources>\n\
                    \x20   <string name=\"app_name\">Demo</string>\n\
                    </resources>\n";
    test.write_file(CATALOG, existing)?;
    test.write_file("app/src/main/java/A.java", "show(\"保存\");\n")?;

    let (output, _, _) = run(test.extract_command())?;
    assert!(output.status.success());

    let catalog = test.read_file(CATALOG)?;
    assert!(catalog.starts_with(&existing.replace("</resources>", "")));
    assert!(catalog.contains(&format!("<string name=\"{}\">保存</string>", id("A", 0))));
    assert!(catalog.ends_with("</resources>\n"));
    assert_eq!(catalog.matches("</resources>").count(), 1);
    Ok(())
}

#[test]
fn test_separate_modules_get_separate_catalogs() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app/src/main/java/A.java", "a(\"首页\");\nb(\"首页\");\n")?;
    test.write_file("lib/src/main/java/L.java", "c(\"首页\");\n")?;

    let (output, _, _) = run(test.extract_command())?;
    assert!(output.status.success());

    assert!(
        test.read_file(CATALOG)?
            .contains(&format!("<string name=\"{}\">首页</string>", id("app_common", 0)))
    );
    assert!(
        test.read_file("lib/src/main/res/values/strings.xml")?
            .contains(&format!("<string name=\"{}\">首页</string>", id("L", 0)))
    );
    Ok(())
}

#[test]
fn test_comments_and_non_candidate_lines_are_untouched() -> Result<()> {
    let source = "/**\n * 作者 \"张三\"\n */\n\
                  // log(\"调试\");\n\
                  show(\"确定\"); // \"注释\"\n\
                  log(\"hello\");\n";
    let test = CliTest::with_file("app/src/main/java/A.java", source)?;

    let (output, _, _) = run(test.extract_command())?;
    assert!(output.status.success());

    let expected = source.replace("\"确定\"", &format!("getString(R.string.{})", id("A", 0)));
    assert_eq!(test.read_file("app/src/main/java/A.java")?, expected);

    let catalog = test.read_file(CATALOG)?;
    assert_eq!(catalog.matches("<string ").count(), 1);
    Ok(())
}

#[test]
fn test_crlf_line_endings_are_preserved() -> Result<()> {
    let test = CliTest::with_file("app/src/main/java/A.java", "a();\r\nb(\"好\");\r\n")?;

    let (output, _, _) = run(test.extract_command())?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("app/src/main/java/A.java")?,
        format!("a();\r\nb(getString(R.string.{}));\r\n", id("A", 0))
    );
    Ok(())
}

#[test]
fn test_other_extensions_are_ignored() -> Result<()> {
    let test = CliTest::with_file("app/src/main/java/A.kt", "val s = \"你好\"\n")?;

    let (output, stdout, _) = run(test.extract_command())?;
    assert!(output.status.success());
    assert!(stdout.contains("Scanned 0 file(s)"));
    assert!(!test.exists(CATALOG));
    assert_eq!(test.read_file("app/src/main/java/A.kt")?, "val s = \"你好\"\n");
    Ok(())
}

#[test]
fn test_missing_root_argument_is_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let (output, _, stderr) = run(test.command())?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Usage"));
    Ok(())
}

#[test]
fn test_root_must_be_a_directory() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.arg("missing");

    let (output, _, stderr) = run(cmd)?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Error: Project root is not a directory"));
    Ok(())
}

#[test]
fn test_absolute_root() -> Result<()> {
    let test = CliTest::with_file("app/src/main/java/A.java", "a(\"好\");\n")?;
    let mut cmd = test.command();
    cmd.arg(test.root());

    let (output, _, _) = run(cmd)?;
    assert!(output.status.success());
    assert!(test.exists(CATALOG));
    Ok(())
}
