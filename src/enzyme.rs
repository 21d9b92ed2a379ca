use regex::Regex;

use crate::constants::{ALPHABET, CUT_MARKER};
use crate::errors::*;

const KNOWN_ENZYMES: [(&str, &str); 10] = [
    ("DpnII", "GATC"),
    ("MboI", "GATC"),
    ("Sau3AI", "GATC"),
    ("HinfI", "GANTC"),
    ("DdeI", "CTNAG"),
    ("HindIII", "AAGCTT"),
    ("NlaIII", "CATG"),
    ("MseI", "TTAA"),
    ("Csp6I", "GTAC"),
    ("CviQI", "GTAC"),
];

lazy_static! {
    static ref VALID_SITE: Regex = {
        let alphabet = String::from_utf8_lossy(ALPHABET);

        Regex::new(&format!("^[{}]+$", alphabet)).unwrap()
    };
}

/// A restriction enzyme recognition site, upper-cased.
#[derive(Clone, Debug, PartialEq)]
pub struct Enzyme {
    pub name: String,
    pub site: String,
}

impl Enzyme {
    /// Creates an enzyme from a recognition sequence over {A,C,G,T,N}.
    pub fn new(site: &str) -> Result<Enzyme> {
        let site: String = site
            .chars()
            .filter(|&c| c != CUT_MARKER)
            .collect::<String>()
            .to_ascii_uppercase();

        if site.is_empty() {
            return Err("empty enzyme recognition site".into());
        } else if !VALID_SITE.is_match(&site) {
            let symbol = site
                .chars()
                .find(|c| !c.is_ascii() || !ALPHABET.contains(&(*c as u8)))
                .unwrap_or('?');

            return Err(format!(
                "invalid symbol {:?} in enzyme site {:?}; only A, C, G, T, and N are supported",
                symbol, site
            )
            .into());
        }

        Ok(Enzyme {
            name: site.clone(),
            site,
        })
    }

    /// Case-insensitive lookup of commonly used enzymes by name.
    pub fn get(name: &str) -> Option<Enzyme> {
        KNOWN_ENZYMES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(known, site)| Enzyme {
                name: (*known).to_string(),
                site: (*site).to_string(),
            })
    }

    /// Parses either an enzyme name or a recognition sequence.
    pub fn parse(value: &str) -> Result<Enzyme> {
        match Self::get(value) {
            Some(enzyme) => Ok(enzyme),
            None => Self::new(value).chain_err(|| format!("unknown enzyme {:?}", value)),
        }
    }

    pub fn len(&self) -> usize {
        self.site.len()
    }

    pub fn is_empty(&self) -> bool {
        self.site.is_empty()
    }
}
