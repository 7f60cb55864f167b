use clap::Parser;
use stache::cli::{Args, Runner};
use stache::error::Error;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use test_log::test;

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.display().to_string()
}

fn runner(argv: &[&str]) -> Runner {
    let mut full = vec!["stache"];
    full.extend_from_slice(argv);
    Runner::new(Args::parse_from(full))
}

#[test]
fn renders_template_with_inline_view() {
    let dir = TempDir::new().unwrap();
    let template = write(dir.path(), "hello.mustache", "Hello, {{name}}!");
    let config = write(dir.path(), "stache.json", "{}");

    let rendered =
        runner(&[&template, "--config", &config, "--view", r#"{"name":"Ada"}"#]).render().unwrap();
    assert_eq!(rendered, "Hello, Ada!");
}

#[test]
fn renders_static_partials_from_files() {
    let dir = TempDir::new().unwrap();
    let template = write(dir.path(), "page.mustache", "{{>greeting}} {{>footer}}");
    let greeting = write(dir.path(), "greeting.mustache", "Hi!");
    let footer = write(dir.path(), "footer.mustache", "bye {{name}}");
    let view = write(dir.path(), "view.json", r#"{"name":"Ada"}"#);
    let config = write(dir.path(), "stache.yaml", "");

    let rendered = runner(&[
        &template,
        "--config",
        &config,
        "--view-file",
        &view,
        "--partial",
        &format!("greeting={greeting}"),
        "--partial",
        &format!("footer={footer}"),
    ])
    .render()
    .unwrap();
    assert_eq!(rendered, "Hi! bye Ada");
}

#[test]
fn lazy_mode_reads_only_referenced_partials() {
    let dir = TempDir::new().unwrap();
    let template = write(dir.path(), "page.mustache", "{{>greeting}}");
    let greeting = write(dir.path(), "greeting.mustache", "Hi!");
    let missing = dir.path().join("does-not-exist.mustache");
    let config = write(dir.path(), "stache.yaml", "");

    let rendered = runner(&[
        &template,
        "--config",
        &config,
        "--lazy",
        "--partial",
        &format!("greeting={greeting}"),
        "--partial",
        &format!("unused={}", missing.display()),
    ])
    .render()
    .unwrap();
    assert_eq!(rendered, "Hi!");
}

#[test]
fn lazy_mode_reports_unknown_partial() {
    let dir = TempDir::new().unwrap();
    let template = write(dir.path(), "page.mustache", "{{>nav}}");
    let config = write(dir.path(), "stache.yaml", "");

    match runner(&[&template, "--config", &config, "--lazy"]).render() {
        Err(Error::PartialNotFound { name }) => assert_eq!(name, "nav"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn engine_flag_overrides_settings() {
    let dir = TempDir::new().unwrap();
    let template = write(dir.path(), "page.j2", r#"{% include "greeting" %}, {{ name }}"#);
    let greeting = write(dir.path(), "greeting.j2", "Hi");
    let config = write(dir.path(), "stache.yaml", "engine: handlebars\n");

    let rendered = runner(&[
        &template,
        "--config",
        &config,
        "--engine",
        "minijinja",
        "--view",
        r#"{"name":"Ada"}"#,
        "--partial",
        &format!("greeting={greeting}"),
    ])
    .render()
    .unwrap();
    assert_eq!(rendered, "Hi, Ada");
}

#[test]
fn settings_aliases_apply_in_lazy_mode() {
    let dir = TempDir::new().unwrap();
    let template = write(dir.path(), "layout.mustache", "<main>{{>content}}</main>");
    let home = write(dir.path(), "home.mustache", "home");
    let config = write(dir.path(), "stache.yaml", "partial_aliases:\n  content: home\n");

    let rendered = runner(&[
        &template,
        "--config",
        &config,
        "--lazy",
        "--partial",
        &format!("home={home}"),
    ])
    .render()
    .unwrap();
    assert_eq!(rendered, "<main>home</main>");
}

#[test]
fn writes_output_file() {
    let dir = TempDir::new().unwrap();
    let template = write(dir.path(), "hello.mustache", "Hello, {{name}}!");
    let config = write(dir.path(), "stache.json", "{}");
    let output = dir.path().join("out/hello.html");

    runner(&[
        &template,
        "--config",
        &config,
        "--view",
        r#"{"name":"Ada"}"#,
        "--output",
        &output.display().to_string(),
    ])
    .run()
    .unwrap();
    assert_eq!(fs::read_to_string(output).unwrap(), "Hello, Ada!");
}

#[test]
fn missing_template_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let config = write(dir.path(), "stache.json", "{}");
    let template = dir.path().join("nope.mustache").display().to_string();

    assert!(matches!(
        runner(&[&template, "--config", &config]).render(),
        Err(Error::IoError(_))
    ));
}

#[test]
fn discovers_settings_next_to_the_template() {
    let dir = TempDir::new().unwrap();
    let template = write(dir.path(), "page.j2", r#"{% include "greeting" %}, {{ name }}"#);
    let greeting = write(dir.path(), "greeting.j2", "Hi");
    write(dir.path(), "stache.yaml", "engine: minijinja\n");

    let rendered = runner(&[
        &template,
        "--view",
        r#"{"name":"Ada"}"#,
        "--partial",
        &format!("greeting={greeting}"),
    ])
    .render()
    .unwrap();
    assert_eq!(rendered, "Hi, Ada");
}

#[test]
fn renders_mustache_sections_by_default() {
    let dir = TempDir::new().unwrap();
    let template = write(dir.path(), "list.mustache", "{{#items}}<{{.}}>{{/items}}{{^more}}.{{/more}}");

    let rendered = runner(&[&template, "--view", r#"{"items":["a","b"],"more":[]}"#])
        .render()
        .unwrap();
    assert_eq!(rendered, "<a><b>.");
}

#[test]
fn minijinja_can_skip_html_escaping() {
    let dir = TempDir::new().unwrap();
    let template = write(dir.path(), "raw.j2", "{{ v }}");
    let config = write(dir.path(), "stache.yaml", "engine: minijinja\nescape_html: false\n");

    let rendered =
        runner(&[&template, "--config", &config, "--view", r#"{"v":"<b>"}"#]).render().unwrap();
    assert_eq!(rendered, "<b>");
}
