use minilearn::prelude::*;

use std::io::BufReader;


// Feature 0 agrees with the label on 5 out of 6 instances,
// feature 1 is noise.
const DATA: &[u8] = b"\
    id,label,f0,f1\n\
    a,1,1,0\n\
    b,1,1,1\n\
    c,1,0,1\n\
    d,0,0,0\n\
    e,0,0,1\n\
    f,0,0,0\n";


#[test]
fn naive_bayes_follows_informative_feature() {
    let sample = Sample::from_reader(BufReader::new(DATA), true).unwrap();
    let train = sample.iter().collect::<Vec<_>>();

    let nb = NaiveBayes::init();
    let f = nb.train(&train).unwrap();

    let yes = Instance::new("yes", 1, &[1, 0]).unwrap();
    let no = Instance::new("no", 0, &[0, 0]).unwrap();
    assert!(f.classify(&yes));
    assert!(!f.classify(&no));

    let (pos, neg) = f.scores(&yes);
    assert!(pos > neg);
}


#[test]
fn naive_bayes_rejects_empty_sample() {
    let nb = NaiveBayes::init();
    assert!(matches!(nb.train(&[]), Err(Error::EmptySample)));
}
