//! File-backed template loading and rendering for `plugdoc-renderer`.

use std::fs;
use std::path::Path;

use plugdoc_core::PluginRecord;
use plugdoc_renderer::{RenderError, TemplateContext, TemplateEngine, STARTER_TEMPLATE};
use tempfile::TempDir;

fn records() -> Vec<PluginRecord> {
    vec![
        PluginRecord::from_url("https://github.com/nvim-lua/plenary.nvim")
            .unwrap()
            .with_description("lua helpers"),
        PluginRecord::from_url("https://github.com/folke/lazy.nvim").unwrap(),
    ]
}

#[test]
fn go_style_extension_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("template.tmpl");
    fs::write(
        &path,
        "# Plugins ({{ meta.plugin_count }})\n{% for p in plugins %}* {{ p.title }} {{ p.url }}\n{% endfor %}",
    )
    .unwrap();

    let engine = TemplateEngine::from_file(&path).expect("load template");
    let out = engine
        .render(&TemplateContext::new(records(), Path::new("plugins")))
        .expect("render");
    assert_eq!(
        out,
        "# Plugins (2)\n* nvim-lua/plenary.nvim https://github.com/nvim-lua/plenary.nvim\n* folke/lazy.nvim https://github.com/folke/lazy.nvim\n"
    );
}

#[test]
fn missing_template_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = TemplateEngine::from_file(&dir.path().join("template.tmpl"))
        .err()
        .expect("missing file must fail");
    assert!(matches!(err, RenderError::Io { .. }));
    assert!(err.is_load_failure());
    assert!(err.to_string().contains("template.tmpl"));
}

#[test]
fn unparsable_template_file_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.tmpl");
    fs::write(&path, "{{ range . }}").unwrap();
    let err = TemplateEngine::from_file(&path)
        .err()
        .expect("parse must fail");
    assert!(matches!(err, RenderError::TemplateLoad { .. }));
    assert!(err.to_string().contains("bad.tmpl"));
}

#[test]
fn starter_template_lists_descriptions_only_when_present() {
    let engine = TemplateEngine::from_source("starter", STARTER_TEMPLATE).unwrap();
    let out = engine
        .render(&TemplateContext::new(records(), Path::new(".")))
        .unwrap();
    assert!(out.contains("## Plugins"));
    assert!(out.contains("(https://github.com/nvim-lua/plenary.nvim): lua helpers"));
    assert!(out.contains("- [folke/lazy.nvim](https://github.com/folke/lazy.nvim)\n"));
    assert!(!out.contains('\r'));
}
