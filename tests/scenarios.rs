use kquant::{DegenerateCluster, Error, Kmeans};

fn line(values: &[f32]) -> Vec<Vec<f32>> {
    values.iter().map(|&v| vec![v]).collect()
}

#[test]
fn two_groups_on_a_line() {
    let data = line(&[0.0, 1.0, 2.0, 9.0, 10.0, 11.0]);
    let fit = Kmeans::new(2)
        .with_iter(5)
        .with_centroids(vec![vec![0.0], vec![9.0]])
        .fit(&data)
        .unwrap();

    assert_eq!(fit.centroids, vec![vec![1.0], vec![10.0]]);
    assert_eq!(fit.labels(), vec![0, 0, 0, 1, 1, 1]);
}

#[test]
fn single_cluster_is_dataset_mean_every_pass() {
    let data = vec![
        vec![1.0, 0.0, 3.0],
        vec![3.0, 2.0, 3.0],
        vec![5.0, 4.0, 0.0],
        vec![7.0, 6.0, 2.0],
    ];
    for iter in [1, 2, 10] {
        let fit = Kmeans::new(1).with_iter(iter).with_seed(9).fit(&data).unwrap();
        assert_eq!(fit.centroids, vec![vec![4.0, 3.0, 2.0]]);
        assert!(fit.labels().iter().all(|&l| l == 0));
    }
}

#[test]
fn empty_cluster_keeps_previous_centroid() {
    let data = line(&[0.0, 0.0, 0.0, 10.0]);
    let fit = Kmeans::new(3)
        .with_iter(1)
        .with_centroids(vec![vec![0.0], vec![0.0], vec![10.0]])
        .fit(&data)
        .unwrap();

    assert_eq!(fit.centroids, vec![vec![0.0], vec![0.0], vec![10.0]]);
    assert_eq!(fit.labels(), vec![0, 0, 0, 2]);
    assert_eq!(
        fit.degenerate,
        vec![DegenerateCluster {
            pass: 0,
            cluster: 1
        }]
    );
    assert_eq!(fit.cluster_sizes(), vec![3, 0, 1]);
}

#[test]
fn empty_cluster_reported_every_pass() {
    let data = line(&[0.0, 0.0, 0.0, 10.0]);
    let fit = Kmeans::new(3)
        .with_iter(4)
        .with_centroids(vec![vec![0.0], vec![0.0], vec![10.0]])
        .fit(&data)
        .unwrap();

    assert_eq!(fit.degenerate.len(), 4);
    assert!(fit.degenerate.iter().all(|d| d.cluster == 1));
    assert!(fit.centroids.iter().flatten().all(|v| v.is_finite()));
}

#[test]
fn too_many_clusters_rejected() {
    let data = line(&[1.0, 2.0, 3.0]);
    let err = Kmeans::new(5).with_iter(3).fit(&data).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidClusterCount {
            requested: 5,
            n_items: 3
        }
    ));
}

#[test]
fn ragged_dataset_rejected() {
    let data = vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]];
    let err = Kmeans::new(1).fit(&data).unwrap_err();
    assert!(matches!(
        err,
        Error::DimensionMismatch {
            expected: 3,
            found: 2
        }
    ));
}

#[test]
fn output_order_matches_input_order() {
    // Interleaved groups keep their input positions.
    let data = line(&[10.0, 0.0, 11.0, 1.0, 12.0, 2.0]);
    let fit = Kmeans::new(2)
        .with_iter(3)
        .with_centroids(vec![vec![0.0], vec![10.0]])
        .fit(&data)
        .unwrap();

    for (p, orig) in fit.points.iter().zip(&data) {
        assert_eq!(&p.features, orig);
    }
    assert_eq!(fit.labels(), vec![1, 0, 1, 0, 1, 0]);
    assert_eq!(fit.quantized(), line(&[11.0, 1.0, 11.0, 1.0, 11.0, 1.0]));
}
