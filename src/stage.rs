use std::fmt;

use log::{error, info};

use crate::error::LoadError;

pub fn update(stage: Stage) {
    match stage {
        Stage::Failed(err) => error!("{}: {}", stage, err),
        other => info!("{}", other),
    }
}

pub enum Stage<'a> {
    Activated,
    Requested(&'a str),
    Loaded(usize),
    Failed(&'a LoadError),
    Cancelled,
    Deactivated,
}

impl<'a> fmt::Display for Stage<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Activated => f.write_str("Activated"),
            Self::Requested(url) => write!(f, "Requested {}", url),
            Self::Loaded(n) => write!(f, "Loaded {} books", n),
            Self::Failed(_) => f.write_str("Failed"),
            Self::Cancelled => f.write_str("Cancelled"),
            Self::Deactivated => f.write_str("Deactivated"),
        }
    }
}
