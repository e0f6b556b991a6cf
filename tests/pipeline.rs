use std::fs;

use tempfile::TempDir;
use tour_plot::testing::random_inputs::{random_cities, random_tour};
use tour_plot::{Config, Error, Layout, Reader, run};

fn write_inputs(dir: &TempDir, cities: &str, tour: &str) -> Config {
    let cities_path = dir.path().join("cidades.txt");
    let tour_path = dir.path().join("caminhominimo.txt");
    fs::write(&cities_path, cities).unwrap();
    fs::write(&tour_path, tour).unwrap();
    Config::default()
        .with_cities_path(cities_path)
        .with_tour_path(tour_path)
        .with_chart_path(dir.path().join("caminhominimo.svg"))
}

#[test]
fn test_positional_run() {
    let dir = TempDir::new().unwrap();
    let config = write_inputs(
        &dir,
        "0 0\n3 4\n6 0\n",
        "Melhor caminho (Forca Bruta):\n1 -> 2: 5.00 Km\n2 -> 3: 5.00 Km\n3 -> 1: 6.00 Km\nDistancia total: 16.00 Km\n",
    );
    run(&config).unwrap();

    let svg = fs::read_to_string(&config.chart_path).unwrap();
    assert!(svg.contains("16.00 Km"));
    assert!(svg.contains("6.00 Km"));
}

#[test]
fn test_labeled_run_with_dot() {
    let dir = TempDir::new().unwrap();
    let config = write_inputs(
        &dir,
        "Cidade 1: (0, 0)\nCidade 2: (3, 4)\n",
        "Melhor caminho:\n1 -> 2: 5,00 Km\n2 -> 1: 5,00 Km\nDistancia total: 10,00 Km\n",
    );
    let config = Config {
        layout: Layout::Labeled,
        ..config.with_dot_path(dir.path().join("tour.dot"))
    };
    run(&config).unwrap();

    let svg = fs::read_to_string(&config.chart_path).unwrap();
    assert!(svg.contains("10.00 Km"));
    let dot = fs::read_to_string(dir.path().join("tour.dot")).unwrap();
    assert!(dot.contains("C1 -> C2"));
}

#[test]
fn test_dangling_reference_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = write_inputs(&dir, "0 0\n3 4\n", "1 -> 99: 3.00 Km\n");

    let err = run(&config).unwrap_err();
    assert!(matches!(err, Error::UnknownCity { city: 99, .. }));
    assert!(!config.chart_path.exists());
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let config = Config::default()
        .with_cities_path(dir.path().join("missing.txt"))
        .with_chart_path(dir.path().join("chart.svg"));

    assert!(matches!(run(&config), Err(Error::File { .. })));
    assert!(!config.chart_path.exists());
}

#[test]
fn test_unreadable_tour_line_names_the_file() {
    let dir = TempDir::new().unwrap();
    let config = write_inputs(&dir, "0 0\n3 4\n", "");
    fs::write(&config.tour_path, b"1 -> 2: 5.00 Km\n\xff\xfe\n").unwrap();

    let err = run(&config).unwrap_err();
    match &err {
        Error::Read { path, line, .. } => {
            assert_eq!(path, &config.tour_path);
            assert_eq!(*line, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("caminhominimo.txt"));
    assert!(!config.chart_path.exists());
}

#[test]
fn test_malformed_tour_aborts() {
    let dir = TempDir::new().unwrap();
    let config = write_inputs(&dir, "0 0\n3 4\n", "1 -> 2: 5,00 Km\n");

    assert!(matches!(run(&config), Err(Error::MalformedLine { line: 1, .. })));
    assert!(!config.chart_path.exists());
}

#[test]
fn test_random_inputs_survive_both_layouts() {
    for seed in 0..20 {
        let cities = random_cities(2 + seed % 7, 100, seed);
        let tour = random_tour(&cities, seed);

        for layout in [Layout::Positional, Layout::Labeled] {
            let reader = Reader::new(layout);
            let read_cities = reader.cities_from_str(&cities.to_layout_string(layout)).unwrap();
            let read_tour = reader.tour_from_str(&tour.to_layout_string(layout)).unwrap();
            assert_eq!(read_cities, cities);
            assert_eq!(read_tour, tour);
        }
    }
}

#[test]
fn test_random_inputs_render() {
    let dir = TempDir::new().unwrap();
    let cities = random_cities(8, 50, 42);
    let tour = random_tour(&cities, 7);
    let config = write_inputs(
        &dir,
        &cities.to_layout_string(Layout::Positional),
        &tour.to_layout_string(Layout::Positional),
    );

    run(&config).unwrap();
    assert!(config.chart_path.exists());
}
