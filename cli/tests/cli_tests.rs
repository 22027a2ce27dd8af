use clap::Parser;
use mapedit_cli::{Cli, run};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

fn mapedit(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("mapedit").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    run(&cli, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn read_level(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn new_level(dir: &Path, cols: usize, rows: usize) -> String {
    let path = dir.join("level.json");
    let path = path.to_str().unwrap().to_string();
    mapedit(&["new", &path, "--cols", &cols.to_string(), "--rows", &rows.to_string()]).unwrap();
    path
}

#[test]
fn tools_lists_builtin_palette() {
    let out = mapedit(&["tools"]).unwrap();
    let ids: Vec<&str> = out
        .lines()
        .map(|line| line[2..].split_whitespace().next().unwrap())
        .collect();
    assert_eq!(
        ids,
        vec![
            "eraser",
            "ground",
            "brick",
            "hard_block",
            "death_block",
            "coin",
            "mushroom",
            "goomba",
            "koopa"
        ]
    );
    assert!(out.lines().any(|l| l.starts_with("* ground")));
}

#[test]
fn tools_json_is_parseable() {
    let out = mapedit(&["tools", "--json"]).unwrap();
    let tools: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(tools[1]["id"], "ground");
    assert_eq!(tools[1]["category"], "terrain");
    assert_eq!(tools[1]["code"], "1");
}

#[test]
fn new_writes_empty_level() {
    let dir = tempfile::tempdir().unwrap();
    let path = new_level(dir.path(), 3, 2);
    assert_eq!(
        read_level(Path::new(&path)),
        serde_json::json!({
            "width": 96,
            "height": 2,
            "tileSize": 32,
            "tiles": [["0", "0", "0"], ["0", "0", "0"]],
            "objects": [],
        })
    );
}

#[test]
fn paint_erase_and_info() {
    let dir = tempfile::tempdir().unwrap();
    let path = new_level(dir.path(), 4, 2);

    mapedit(&["paint", &path, "--row", "1", "--col", "0", "--tool", "ground"]).unwrap();
    mapedit(&["paint", &path, "--row", "1", "--col", "0", "--tool", "coin"]).unwrap();
    mapedit(&["paint", &path, "--row", "0", "--col", "3", "--tool", "koopa"]).unwrap();

    let level = read_level(Path::new(&path));
    assert_eq!(level["tiles"][1][0], "1");
    assert_eq!(
        level["objects"],
        serde_json::json!([
            { "type": "koopa", "x": 96, "y": 0 },
            { "type": "coin", "x": 0, "y": 32 },
        ])
    );

    let info = mapedit(&["info", &path]).unwrap();
    assert!(info.contains("4 cols x 2 rows (32px tiles)"));
    assert!(info.contains("Stacked:  1"));

    let out = mapedit(&["erase", &path, "--row", "1", "--col", "0"]).unwrap();
    assert_eq!(out, "Erased (1, 0)\n");
    let out = mapedit(&["erase", &path, "--row", "1", "--col", "0"]).unwrap();
    assert_eq!(out, "Erased (1, 0): no change\n");
    assert_eq!(read_level(Path::new(&path))["tiles"][1][0], "0");
}

#[test]
fn paint_rejects_unknown_tool_and_out_of_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let path = new_level(dir.path(), 2, 2);
    let before = fs::read_to_string(&path).unwrap();

    assert!(mapedit(&["paint", &path, "--row", "0", "--col", "0", "--tool", "lava"]).is_err());
    assert!(mapedit(&["paint", &path, "--row", "5", "--col", "0", "--tool", "brick"]).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn resize_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let path = new_level(dir.path(), 4, 4);
    mapedit(&["paint", &path, "--row", "0", "--col", "0", "--tool", "brick"]).unwrap();
    mapedit(&["paint", &path, "--row", "3", "--col", "3", "--tool", "brick"]).unwrap();

    mapedit(&["resize", &path, "--cols", "2", "--rows", "3"]).unwrap();
    let level = read_level(Path::new(&path));
    assert_eq!(level["width"], 64);
    assert_eq!(level["height"], 3);
    assert_eq!(level["tiles"][0][0], "2");

    assert!(mapedit(&["resize", &path, "--cols", "0", "--rows", "3"]).is_err());

    mapedit(&["clear", &path]).unwrap();
    let level = read_level(Path::new(&path));
    assert_eq!(level["tiles"], serde_json::json!([["0", "0"], ["0", "0"], ["0", "0"]]));
}

#[test]
fn replay_right_drag_script() {
    let dir = tempfile::tempdir().unwrap();
    let path = new_level(dir.path(), 6, 4);
    for col in ["3", "4", "5"] {
        mapedit(&["paint", &path, "--row", "2", "--col", col, "--tool", "ground"]).unwrap();
        mapedit(&["paint", &path, "--row", "2", "--col", col, "--tool", "coin"]).unwrap();
    }

    let script = dir.path().join("strokes.txt");
    fs::write(
        &script,
        "# wipe two cells\ntool goomba\ndown 2 3 secondary\nenter 2 4\nup\nenter 2 5\n",
    )
    .unwrap();

    let out = mapedit(&["replay", &path, script.to_str().unwrap()]).unwrap();
    assert_eq!(out, "Replayed 5 steps, 2 grid changes\n");

    let level = read_level(Path::new(&path));
    assert_eq!(level["tiles"][2], serde_json::json!(["0", "0", "0", "0", "0", "1"]));
    assert_eq!(
        level["objects"],
        serde_json::json!([{ "type": "coin", "x": 160, "y": 64 }])
    );
}

#[test]
fn replay_reports_bad_script_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = new_level(dir.path(), 2, 2);
    let script = dir.path().join("bad.txt");
    fs::write(&script, "down 0 0\njump\n").unwrap();

    let err = mapedit(&["replay", &path, script.to_str().unwrap()]).unwrap_err();
    assert!(format!("{err:#}").contains("line 2"));
}

#[test]
fn config_file_sets_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("mapedit.toml");
    fs::write(&config, "[grid]\nrows = 2\ncols = 3\ntile_size = 16\n").unwrap();
    let path = dir.path().join("level.json");

    mapedit(&[
        "--config",
        config.to_str().unwrap(),
        "new",
        path.to_str().unwrap(),
    ])
    .unwrap();

    let level = read_level(&path);
    assert_eq!(level["width"], 48);
    assert_eq!(level["height"], 2);
    assert_eq!(level["tileSize"], 16);
}

#[test]
fn missing_config_and_level_are_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(mapedit(&["info", missing.to_str().unwrap()]).is_err());
    assert!(mapedit(&["--config", "/nonexistent/mapedit.toml", "tools"]).is_err());
}

#[test]
fn invalid_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("mapedit.toml");
    fs::write(&config, "[export]\nterrain_under_entity = \"supress\"\n").unwrap();
    let path = dir.path().join("level.json");

    let err = mapedit(&[
        "--config",
        config.to_str().unwrap(),
        "new",
        path.to_str().unwrap(),
        "--cols",
        "2",
        "--rows",
        "1",
    ])
    .unwrap_err();
    assert!(format!("{err:#}").contains("Invalid config file"));
    assert!(!path.exists());
}

#[test]
fn malformed_level_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"width": 64, "height": 1}"#).unwrap();
    let err = mapedit(&["info", path.to_str().unwrap()]).unwrap_err();
    assert!(format!("{err:#}").contains("tiles"));
}
