use minilearn::prelude::*;
use minilearn::research::{evaluate, DEFAULT_N_FOLDS};

use std::collections::HashMap;
use std::io::BufReader;


fn instances(n: usize) -> Vec<Instance> {
    (0..n).map(|i| {
            let f0 = u8::from(i % 2 == 0);
            let f1 = u8::from(i % 3 == 0);
            let f2 = u8::from(i % 5 == 0);
            Instance::new(format!("x{i}"), f0, &[f0, f1, f2]).unwrap()
        })
        .collect()
}


#[test]
fn two_folds_of_four() {
    let bytes = b"\
        a,1,1,0\n\
        b,1,1,1\n\
        c,0,0,0\n\
        d,0,0,1\n";
    let sample = Sample::from_reader(BufReader::new(&bytes[..]), false)
        .unwrap();

    let reports = evaluate(sample.instances(), 2).unwrap();
    assert_eq!(reports.len(), 2);
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.fold, i);
        assert_eq!(report.test_size, 2);
        assert_eq!(report.train_size, 2);
        assert_eq!(report.matrix.total(), 2);
    }
}


#[test]
fn folds_partition_the_instances() {
    for n in 1..=25 {
        let insts = instances(n);
        for k in 1..=(n + 2) {
            let cv = CrossValidation::new(&insts).n_folds(k).shuffle();

            let mut n_tested = HashMap::new();
            for fold in cv.folds().unwrap() {
                assert_eq!(fold.train.len() + fold.test.len(), n);
                for inst in fold.test.iter() {
                    *n_tested.entry(inst.id()).or_insert(0) += 1;
                    assert!(fold.train.iter().all(|t| t.id() != inst.id()));
                }
            }
            assert_eq!(n_tested.len(), n);
            assert!(n_tested.values().all(|&c| c == 1));
        }
    }
}


#[test]
fn matrix_counts_every_test_instance() {
    let insts = instances(23);
    let tree = DecisionTreeBuilder::new().without_pruning().build().unwrap();
    let reports = CrossValidation::new(&insts)
        .n_folds(4)
        .evaluate(&tree)
        .unwrap();

    // fold size is ceil(23 / 4) = 6
    let sizes = reports.iter().map(|r| r.test_size).collect::<Vec<_>>();
    assert_eq!(sizes, vec![6, 6, 6, 5]);

    for report in reports.iter() {
        assert_eq!(report.matrix.total(), report.test_size);
        let sum = report.accuracy()
            + report.false_positive_rate()
            + report.false_negative_rate();
        assert!((sum - 1f64).abs() < 1e-9);
    }

    // The label equals feature 0, so the tree is perfect.
    assert!(reports.iter().all(|r| r.accuracy() == 1f64));
}


#[test]
fn every_learner_runs_through_the_harness() {
    let insts = instances(30);
    let cv = CrossValidation::new(&insts)
        .seed(42)
        .shuffle()
        .verbose(true);

    let tree = DecisionTreeBuilder::new().build().unwrap();
    let reports = cv.evaluate(&tree).unwrap();
    assert_eq!(reports.len(), DEFAULT_N_FOLDS);

    let reports = cv.evaluate(&NaiveBayes::init()).unwrap();
    assert_eq!(reports.len(), DEFAULT_N_FOLDS);

    let reports = cv.evaluate(&NearestNeighbor::new(3).unwrap()).unwrap();
    let summary = Summary::new(&reports);
    assert_eq!(summary.n_folds, DEFAULT_N_FOLDS);
    assert_eq!(summary.matrix.total(), 30);
}


#[test]
fn leave_one_out_with_trace() {
    let insts = instances(8);
    let tree = DecisionTreeBuilder::new().build().unwrap();
    let reports = CrossValidation::new(&insts)
        .leave_one_out()
        .trace(true)
        .evaluate(&tree)
        .unwrap();

    assert_eq!(reports.len(), 8);
    for (report, inst) in reports.iter().zip(insts.iter()) {
        assert_eq!(report.predictions.len(), 1);
        assert_eq!(report.predictions[0].id, inst.id());
        assert_eq!(report.predictions[0].label, inst.label());
    }

    let json = to_json(&reports).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["folds"].as_array().unwrap().len(), 8);
    assert_eq!(value["summary"]["n_folds"], 8);
}


#[test]
fn invalid_fold_counts() {
    let insts = instances(4);
    let err = evaluate(&insts, 0).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { name: "n_folds", .. }));

    // A single fold leaves nothing to train on.
    let err = evaluate(&insts, 1).unwrap_err();
    assert!(matches!(err, Error::EmptySample));

    let err = evaluate(&[], 3).unwrap_err();
    assert!(matches!(err, Error::EmptySample));
}
