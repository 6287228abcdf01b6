// End-to-end tests: prediction file on disk -> command -> rendered output.

use std::{fs, path::Path};

use clap::Parser;
use pipe_risk_map::{
    build_map,
    cli::{Cli, Commands},
    commands::{compare, render},
    config::Config,
    io::{html::to_html_string, read_feature_collection},
    MapOptions, Mode,
};
use serde_json::{json, Value};

fn predictions() -> Value {
    json!({
        "type": "FeatureCollection",
        "name": "pred_pipa",
        "features": [
            {
                "type": "Feature",
                "geometry": { "type": "LineString", "coordinates": [[106.80, -6.20], [106.81, -6.21]] },
                "properties": {
                    "id_segmen": "SEG-1", "Jenis_pipa": "HDPE", "Diameter": 110, "Length": 52.75,
                    "DMA_norm": "DMA-01",
                    "risk_bucket": "Very High", "p_ge1": 0.91234, "lambda_hat": 2.400001,
                    "risk_bucket_gbt": "Moderately High", "p_ge1_gbt": 0.61, "lambda_hat_gbt": 0.9
                }
            },
            {
                "type": "Feature",
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [[[106.82, -6.22], [106.83, -6.23]], [[106.84, -6.24], [106.85, -6.25]]]
                },
                "properties": {
                    "id_segmen": "SEG-2", "Jenis_pipa": "<ACP>",
                    "risk_bucket": "Low", "p_ge1": "N/A", "lambda_hat": null
                }
            }
        ]
    })
}

fn write_predictions(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("pred.geojson");
    fs::write(&path, predictions().to_string()).unwrap();
    path
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("pipe-risk-map").chain(args.iter().copied())).unwrap()
}

#[test]
fn html_page_has_map_legend_and_escaped_data() {
    let dir = tempfile::tempdir().unwrap();
    let features = read_feature_collection(&write_predictions(dir.path())).unwrap();
    let artifact = build_map(&features, Mode::Poisson, &MapOptions::default()).unwrap();
    let html = to_html_string(&artifact).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Pipe Failure Risk – Poisson vs GBT</title>"));
    assert!(html.contains("leaflet@1.9.4"));
    assert!(html.contains("<b>Risk Legend</b>"));
    for color in ["#7fc97f", "#beed90", "#ffff99", "#fdc86e", "#fdae61", "#d7191c"] {
        assert!(html.contains(&format!("background:{color};")), "legend is missing {color}");
    }
    assert!(html.contains("\"Risk (Poisson)\""));
    assert!(html.contains("basemaps.cartocdn.com"));
    assert!(html.contains("map.fitBounds(spec.bounds, { padding: spec.padding });"));

    // Tooltip markup is escaped, and the only closing script tags are real ones.
    assert!(html.contains("Jenis_pipa: &lt;ACP&gt;"));
    assert_eq!(html.matches("</script>").count(), 2);
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn render_command_writes_html_and_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_predictions(dir.path());
    let output = dir.path().join("out/gbt.html");
    let (input, output) = (input.to_str().unwrap(), output.to_str().unwrap());

    let cli = parse(&["render", "--mode", "gbt", "--input", input, "-o", output]);
    let Commands::Render(args) = &cli.command else { unreachable!() };
    render::run(&cli, &Config::default(), args).unwrap();

    let html = fs::read_to_string(output).unwrap();
    assert!(html.contains("\"Risk (GBT)\""));
    assert!(html.contains("#fdc86e"));

    // Second run without --force must fail and leave the file intact.
    assert!(render::run(&cli, &Config::default(), args).is_err());
    assert_eq!(fs::read_to_string(output).unwrap(), html);
}

#[test]
fn render_command_json_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_predictions(dir.path());
    let output = dir.path().join("artifact.json");

    let cli = parse(&["render", "-m", "poisson", "-i", input.to_str().unwrap(), "-o", output.to_str().unwrap(), "-f", "json"]);
    let Commands::Render(args) = &cli.command else { unreachable!() };
    render::run(&cli, &Config::default(), args).unwrap();

    let artifact: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(artifact["viewport"]["bounds"], json!([[-6.25, 106.80], [-6.20, 106.85]]));
    assert_eq!(artifact["layers"][0]["name"], "Risk (Poisson)");
    assert_eq!(artifact["layers"][0]["features"][0]["style"], json!({ "color": "#d7191c", "weight": 3, "opacity": 0.9 }));
    assert_eq!(
        artifact["layers"][0]["features"][1]["properties"]["_tooltip"],
        "id_segmen: SEG-2<br>Jenis_pipa: &lt;ACP&gt;<br>λ̂: None<br>P(≥1): N/A<br>Risk: Low",
    );
    assert_eq!(artifact["legend"]["entries"].as_array().unwrap().len(), 6);
}

#[test]
fn render_command_geojson_keeps_input_members() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_predictions(dir.path());
    let output = dir.path().join("augmented.geojson");

    let cli = parse(&["render", "-i", input.to_str().unwrap(), "-o", output.to_str().unwrap(), "-f", "geojson"]);
    let Commands::Render(args) = &cli.command else { unreachable!() };
    render::run(&cli, &Config::default(), args).unwrap();

    let fc: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(fc["name"], "pred_pipa");
    assert_eq!(
        fc["features"][0]["properties"]["_tooltip"],
        "id_segmen: SEG-1<br>Jenis_pipa: HDPE<br>Diameter: 110<br>Length: 52.75<br>DMA_norm: DMA-01\
         <br>λ̂: 0.9<br>P(≥1): 0.61<br>Risk: Moderately High",
    );
}

#[test]
fn html_to_stdout_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_predictions(dir.path());

    let cli = parse(&["render", "-i", input.to_str().unwrap(), "-o", "-"]);
    let Commands::Render(args) = &cli.command else { unreachable!() };
    assert!(render::run(&cli, &Config::default(), args).is_err());
}

#[test]
fn missing_bundled_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config { data_dir: dir.path().join("nowhere"), ..Config::default() };
    let output = dir.path().join("map.html");

    let cli = parse(&["render", "-o", output.to_str().unwrap()]);
    let Commands::Render(args) = &cli.command else { unreachable!() };
    let err = render::run(&cli, &config, args).unwrap_err();
    assert!(format!("{err:#}").contains("gbt_pred_pipa.geojson"));
    assert!(!output.exists());
}

#[test]
fn compare_command_builds_both_layers_from_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_predictions(dir.path());
    let input = input.to_str().unwrap();
    let output = dir.path().join("compare.json");

    let cli = parse(&["compare", "--poisson", input, "--gbt", input, "-o", output.to_str().unwrap(), "-f", "json"]);
    let Commands::Compare(args) = &cli.command else { unreachable!() };
    compare::run(&cli, &Config::default(), args).unwrap();

    let artifact: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let names: Vec<&str> = artifact["layers"].as_array().unwrap().iter()
        .map(|layer| layer["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Risk (Poisson)", "Risk (GBT)"]);
    assert_eq!(artifact["layers"][0]["features"][0]["style"]["color"], "#d7191c");
    assert_eq!(artifact["layers"][1]["features"][0]["style"]["color"], "#fdc86e");
    // The second segment has no GBT bucket and falls back to Moderate.
    assert_eq!(artifact["layers"][1]["features"][1]["style"]["color"], "#ffff99");
}
