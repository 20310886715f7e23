use std::io::Write;

use gdvscd::{
    HarnessErr, Session,
    config::{DeviceConfig, InitConfig, RunConfig},
    dataset::load_dataset,
};
use tempfile::NamedTempFile;

fn json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn compares_both_optimizers_from_files() {
    let features = json_file("[[1, 1], [1, 2], [1, 3]]");
    let targets = json_file("[1, 2, 3]");
    let config = json_file(&format!(
        r#"{{
            "features": {:?},
            "targets": {:?},
            "learning_rate": 0.1,
            "iterations": 100,
            "init": {{ "kind": "const", "value": 0.0 }},
            "concurrent": true
        }}"#,
        features.path(),
        targets.path()
    ));

    let config = RunConfig::from_file(config.path()).unwrap();
    let dataset = load_dataset(&config.features, &config.targets).unwrap();
    let report = Session::new(config, dataset).unwrap().run().await.unwrap();

    let gd = &report.gradient_descent;
    let cd = &report.coordinate_descent;
    assert_eq!(gd.cost_history.len(), 100);
    assert_eq!(cd.cost_history.len(), 100);
    assert!(gd.final_cost().unwrap() < 1e-3);
    assert!(cd.final_cost().unwrap() < cd.cost_history[0]);
    assert_ne!(gd.cost_history, cd.cost_history);

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["CD"]["costHistory"].is_array());
    assert!(json["GD"]["theta"].is_array());
    assert!(json["GD"]["elapsedMs"].is_f64());
}

#[tokio::test]
async fn both_devices_produce_the_same_report() {
    let features = json_file("[[1, 0.5, 2], [1, 1.5, -1], [1, 2.5, 0], [1, 3.5, 1]]");
    let targets = json_file("[2, 0, 1.5, 3]");
    let dataset = load_dataset(features.path(), targets.path()).unwrap();

    let mut reports = Vec::new();
    for device in [DeviceConfig::Sequential, DeviceConfig::default()] {
        let config = RunConfig {
            learning_rate: 0.01,
            iterations: 30,
            init: InitConfig::Explicit {
                values: vec![0.1, 0.2, 0.3],
            },
            device,
            ..RunConfig::default()
        };

        let report = Session::new(config, dataset.clone())
            .unwrap()
            .run()
            .await
            .unwrap();
        reports.push(report);
    }

    assert_eq!(
        reports[0].gradient_descent.cost_history,
        reports[1].gradient_descent.cost_history
    );
    assert_eq!(
        reports[0].coordinate_descent.theta,
        reports[1].coordinate_descent.theta
    );
}

#[test]
fn missing_dataset_is_an_io_error() {
    let err = load_dataset("/no/such/features.json", "/no/such/output.json").unwrap_err();
    assert!(matches!(err, HarnessErr::Io { .. }));
}
