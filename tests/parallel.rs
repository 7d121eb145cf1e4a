#![cfg(feature = "parallel")]
use dbscan::{Dbscan, DbscanHyperParams};

#[test]
fn cluster_par() {
    let data: Vec<Vec<f32>> = vec![
        vec![1.0, 1.0],
        vec![1.1, 1.1],
        vec![0.9, 1.0],
        vec![5.0, 5.0],
        vec![5.1, 5.0],
        vec![4.9, 5.1],
        vec![10.0, 10.0],
    ];
    let hyper_params = DbscanHyperParams::builder().epsilon(0.5).min_pts(3).build();
    let clusterer = Dbscan::new(&data, hyper_params);
    let result = clusterer.cluster_par().unwrap();

    assert_eq!(2, result.n_clusters());
    assert_eq!(vec![0, 0, 0, 1, 1, 1, -1], result.labels());
}

#[cfg(feature = "serial")]
#[test]
fn cluster_par_matches_serial() {
    let mut data: Vec<Vec<f64>> = (0..50).map(|i| vec![(i % 10) as f64, (i / 10) as f64]).collect();
    data.push(vec![100.0, 100.0]);

    let hyper_params = DbscanHyperParams::builder().epsilon(1.0).min_pts(4).build();
    let clusterer = Dbscan::new(&data, hyper_params);

    let serial = clusterer.cluster().unwrap();
    let parallel = clusterer.cluster_par().unwrap();
    assert_eq!(serial, parallel);
}
