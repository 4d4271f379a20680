//! Reading PEM armoured data.
//!
//! PEM wraps DER encoded data into base64 text between a line
//! `-----BEGIN <LABEL>-----` and a line `-----END <LABEL>-----`. This
//! module extracts these blocks from text and decodes their content.
//!
//! This module is only available if the `pem` feature is enabled.

use std::{error, fmt};
use bytes::Bytes;
use crate::decode::{DecodeError, Decoder};
use crate::output::Indenter;


//------------ PemBlock ------------------------------------------------------

/// A single decoded PEM block.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PemBlock {
    /// The label, e.g., `CERTIFICATE` or `PRIVATE KEY`.
    label: String,

    /// The decoded content.
    data: Bytes,
}

impl PemBlock {
    fn from_pem(pem: ::pem::Pem) -> Self {
        PemBlock {
            label: pem.tag().into(),
            data: pem.into_contents().into(),
        }
    }

    /// Returns the label of the block.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the decoded content of the block.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Prints the block.
    ///
    /// This prints a line `PEM <LABEL>` followed by the decoded content
    /// one level deeper.
    pub fn decode(
        &self, decoder: &Decoder, out: &mut Indenter
    ) -> Result<(), DecodeError> {
        out.print_str("PEM ");
        out.println(&self.label);
        decoder.parse(&mut out.next_level(), &self.data)
    }
}


//------------ Functions -----------------------------------------------------

/// Returns whether the data looks like it contains PEM blocks.
///
/// This is the case if any line starts with `-----BEGIN `.
pub fn is_pem(data: &[u8]) -> bool {
    data.split(|&ch| ch == b'\n').any(|line| {
        let start = line.iter().position(|ch| !ch.is_ascii_whitespace());
        match start {
            Some(start) => line[start..].starts_with(b"-----BEGIN "),
            None => false
        }
    })
}

/// Extracts all PEM blocks from `input`.
///
/// Text outside of blocks is ignored, as are blocks without an END line.
/// RFC 1421 headers such as `Proc-Type` are skipped. The content of
/// encrypted blocks is returned as is.
pub fn parse(input: impl AsRef<[u8]>) -> Result<Vec<PemBlock>, PemError> {
    let blocks = ::pem::parse_many(input).map_err(PemError)?;
    Ok(blocks.into_iter().map(|pem| {
        let block = PemBlock::from_pem(pem);
        log::debug!(
            "PEM block {} with {} octets of content",
            block.label, block.data.len()
        );
        block
    }).collect())
}


//------------ PemError ------------------------------------------------------

/// An error happened while reading PEM data.
#[derive(Debug)]
pub struct PemError(::pem::PemError);

impl fmt::Display for PemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid PEM data: {}", self.0)
    }
}

impl error::Error for PemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.0)
    }
}


//============ Tests =========================================================
