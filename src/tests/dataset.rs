#[cfg(test)]
mod test {
    use crate::prelude::*;
    use crate::tests::toolkit::{csv_resource, ocean_resource, temporary_csv, OCEAN_TRIAL};

    #[test]
    fn ocean_trial() {
        let loader = DatasetLoader::default();
        let paths = OCEAN_TRIAL.map(ocean_resource);
        let datasets = loader.load_files(&paths).unwrap();

        assert_eq!(datasets.len(), 3);
        for (dataset, (name, path)) in datasets.iter().zip(OCEAN_TRIAL.iter().zip(paths.iter())) {
            assert_eq!(dataset.title, name.trim_end_matches(".csv"));
            assert_eq!(dataset.path.as_ref(), Some(path));
            assert_eq!(dataset.trajectory.len(), 40);
        }

        let start = datasets[0].trajectory.start();
        assert_eq!(start, EcefPosition::new(4066470.736, -294341.909, 4888433.640));

        let geo = start.to_geodetic_wgs84().unwrap();
        assert!((geo.latitude_ddeg - 50.36).abs() < 1.0E-7, "{}", geo);
        assert!((geo.longitude_ddeg + 4.14).abs() < 1.0E-7, "{}", geo);
        assert!((geo.altitude_m - 2.0).abs() < 1.0E-2, "{}", geo);

        // travel from returns to the starting point
        let end = datasets[2].trajectory.end().to_geodetic_wgs84().unwrap();
        assert!((end.latitude_ddeg - geo.latitude_ddeg).abs() < 1.0E-2);
        assert!((end.longitude_ddeg - geo.longitude_ddeg).abs() < 1.0E-2);
    }

    #[test]
    fn custom_title() {
        let dataset = DatasetLoader::default()
            .load_file(
                ocean_resource("gps_data_Travel_Mid.csv"),
                Some("Ocean Field Trial: Mid Trajectory"),
            )
            .unwrap();
        assert_eq!(dataset.title, "Ocean Field Trial: Mid Trajectory");
    }

    #[test]
    fn single_sample() {
        // padded headers, extra column
        let dataset = DatasetLoader::default()
            .load_file(csv_resource("single_sample.csv"), None)
            .unwrap();
        assert_eq!(dataset.title, "single_sample");
        assert_eq!(dataset.trajectory.len(), 1);
        assert_eq!(dataset.trajectory.start(), dataset.trajectory.end());
    }

    #[test]
    fn custom_columns() {
        let path = csv_resource("custom_columns.csv");
        assert!(matches!(
            DatasetLoader::default().load_file(&path, None),
            Err(Error::MissingColumn { .. })
        ));

        let dataset = DatasetLoader::default()
            .with_columns("ecef_x", "ecef_y", "ecef_z")
            .load_file(&path, None)
            .unwrap();
        assert_eq!(dataset.trajectory.len(), 5);
        assert_eq!(
            dataset.trajectory.start(),
            EcefPosition::new(4066470.736, -294341.909, 4888433.640)
        );
    }

    #[test]
    fn missing_file() {
        let path = csv_resource("does_not_exist.csv");
        match DatasetLoader::default().load_file(&path, None) {
            Err(Error::Io { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn missing_column() {
        match DatasetLoader::default().load_file(csv_resource("missing_column.csv"), None) {
            Err(Error::MissingColumn { column, .. }) => assert_eq!(column, "Z"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn invalid_value() {
        match DatasetLoader::default().load_file(csv_resource("invalid_value.csv"), None) {
            Err(Error::InvalidValue {
                line,
                column,
                value,
                ..
            }) => {
                assert_eq!(line, 4);
                assert_eq!(column, "Y");
                assert_eq!(value, "n/a");
            },
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_dataset() {
        let path = csv_resource("header_only.csv");
        match DatasetLoader::default().load_file(&path, None) {
            Err(Error::EmptyDataset(failed)) => assert_eq!(failed, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_file() {
        let path = temporary_csv("");
        let result = DatasetLoader::default().load_file(&path, None);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(Error::MissingColumn { .. })));
    }

    #[test]
    fn malformed_csv() {
        let path = temporary_csv("X,Y,Z\n1.0,2.0,3.0\n4.0,5.0\n");
        let result = DatasetLoader::default().load_file(&path, None);
        let _ = std::fs::remove_file(&path);
        match result {
            Err(Error::Csv { path: failed, .. }) => {
                assert_eq!(failed, path);
            },
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn malformed_csv_names_the_file() {
        let path = temporary_csv("X,Y,Z\n1.0,2.0,3.0\n4.0,5.0\n");
        let paths = [ocean_resource("gps_data_Travel_To.csv"), path.clone()];
        let result = DatasetLoader::default().load_files(&paths);
        let _ = std::fs::remove_file(&path);
        let error = result.unwrap_err();
        assert!(
            error.to_string().contains(&path.display().to_string()),
            "{}",
            error
        );
    }

    #[test]
    fn non_finite_coordinates() {
        for cell in ["inf", "NaN", "-inf", "nan"] {
            let path = temporary_csv(&format!(
                "X,Y,Z\n4066470.736,-294341.909,4888433.640\n4066761.038,{},4888164.567\n",
                cell
            ));
            let result = DatasetLoader::default().load_file(&path, None);
            let _ = std::fs::remove_file(&path);
            match result {
                Err(Error::InvalidValue {
                    line,
                    column,
                    value,
                    ..
                }) => {
                    assert_eq!(line, 3);
                    assert_eq!(column, "Y");
                    assert_eq!(value, cell);
                },
                other => panic!("\"{}\" cell: unexpected result: {:?}", cell, other),
            }
        }
    }

    #[test]
    fn no_datasets() {
        let paths: [&str; 0] = [];
        assert!(matches!(
            DatasetLoader::default().load_files(&paths),
            Err(Error::NoDatasets)
        ));
    }

    #[test]
    fn first_failure_aborts() {
        let paths = [
            ocean_resource("gps_data_Travel_To.csv"),
            csv_resource("invalid_value.csv"),
            ocean_resource("gps_data_Travel_Fro.csv"),
        ];
        assert!(matches!(
            DatasetLoader::default().load_files(&paths),
            Err(Error::InvalidValue { .. })
        ));
    }

    #[test]
    #[cfg(feature = "flate2")]
    fn gzip_compressed() {
        let loader = DatasetLoader::default();
        let compressed = loader
            .load_file(csv_resource("gz").join("travel_to.csv.gz"), None)
            .unwrap();
        let plain = loader
            .load_file(ocean_resource("gps_data_Travel_To.csv"), None)
            .unwrap();
        assert_eq!(compressed.trajectory, plain.trajectory);
        assert_eq!(compressed.title, "travel_to");
    }
}
