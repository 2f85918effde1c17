//! A node struct used in the decision tree algorithm.
use serde::{Serialize, Deserialize};

use crate::{Classifier, Instance};

use std::fmt;


/// A node of the decision tree.
/// Each branch node owns exactly two subtrees.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Tests the `feature`th feature.
    /// Instances whose feature is `1` go to `positive`,
    /// the others go to `negative`.
    Branch {
        /// The tested feature.
        feature:  usize,
        /// The subtree for feature value `1`.
        positive: Box<Node>,
        /// The subtree for feature value `0`.
        negative: Box<Node>,
    },
    /// Predicts `label`.
    Leaf {
        /// The predicted label.
        label: bool,
    },
}


impl Node {
    /// Construct a branch node testing `feature`.
    pub fn branch(
        feature:  usize,
        positive: Box<Node>,
        negative: Box<Node>,
    ) -> Self
    {
        Self::Branch { feature, positive, negative, }
    }


    /// Construct a leaf node predicting `label`.
    pub fn leaf(label: bool) -> Self {
        Self::Leaf { label, }
    }


    /// The number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { positive, negative, .. } => {
                1 + positive.depth().max(negative.depth())
            },
            Self::Leaf { .. } => 0,
        }
    }


    /// The number of leaves of this subtree.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Branch { positive, negative, .. } => {
                positive.n_leaves() + negative.n_leaves()
            },
            Self::Leaf { .. } => 1,
        }
    }


    /// Returns the tested features of every root-to-leaf path,
    /// ordered from the root.
    pub fn paths(&self) -> Vec<Vec<usize>> {
        match self {
            Self::Branch { feature, positive, negative } => {
                positive.paths()
                    .into_iter()
                    .chain(negative.paths())
                    .map(|mut path| {
                        path.insert(0, *feature);
                        path
                    })
                    .collect()
            },
            Self::Leaf { .. } => vec![Vec::new()],
        }
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch { feature, positive, negative } => {
                let splitter = format!(
                    "\tnode_{id} [ label = \"feature {feature} = 1 ?\" ];\n",
                );

                let positive_id = id + 1;
                let (positive, negative_id) = positive.to_dot_info(positive_id);
                let (mut negative, return_id) = negative.to_dot_info(negative_id);

                let mut info = positive;
                info.push(splitter);
                info.append(&mut negative);

                let positive_edge = format!(
                    "\tnode_{id} -- node_{positive_id} [ label = \"Yes\" ];\n",
                );
                info.push(positive_edge);
                let negative_edge = format!(
                    "\tnode_{id} -- node_{negative_id} [ label = \"No\" ];\n",
                );
                info.push(negative_edge);

                (info, return_id)
            },
            Node::Leaf { label } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{}\", shape = box ];\n",
                    u8::from(*label),
                );

                (vec![info], id + 1)
            }
        }
    }
}


impl Classifier for Node {
    fn classify(&self, instance: &Instance) -> bool {
        let mut node = self;
        loop {
            match node {
                Self::Branch { feature, positive, negative } => {
                    node = if instance.feature(*feature) {
                        positive.as_ref()
                    } else {
                        negative.as_ref()
                    };
                },
                Self::Leaf { label } => {
                    return *label;
                },
            }
        }
    }
}


impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch { feature, positive, negative, } => {
                f.debug_struct("Branch")
                    .field("feature", &feature)
                    .field("positive", &positive)
                    .field("negative", &negative)
                    .finish()
            },
            Self::Leaf { label, } => {
                f.debug_struct("Leaf")
                    .field("label", &u8::from(*label))
                    .finish()
            },
        }
    }
}
