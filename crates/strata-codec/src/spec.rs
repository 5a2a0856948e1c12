use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strata_io::Transformation;

use crate::checksum::Crc32Trailer;
use crate::encoding::HexEncoding;
use crate::error::CodecError;
use crate::identity::Identity;
use crate::reverse::ReverseBytes;

/// Name of a reference transformation, as written in configuration files and
/// on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecSpec {
    Identity,
    Reverse,
    Crc32,
    Hex,
}

impl CodecSpec {
    pub const ALL: [CodecSpec; 4] = [Self::Identity, Self::Reverse, Self::Crc32, Self::Hex];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Reverse => "reverse",
            Self::Crc32 => "crc32",
            Self::Hex => "hex",
        }
    }

    /// A fresh instance of the named transformation.
    pub fn transformation(&self) -> Box<dyn Transformation> {
        match self {
            Self::Identity => Box::new(Identity),
            Self::Reverse => Box::new(ReverseBytes),
            Self::Crc32 => Box::new(Crc32Trailer),
            Self::Hex => Box::new(HexEncoding),
        }
    }
}

impl FromStr for CodecSpec {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|spec| spec.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CodecError::Unknown(s.to_string()))
    }
}

impl fmt::Display for CodecSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strata_io::{read_bytes, write_bytes, MemoryStore};

    #[test]
    fn parse_every_name() {
        for spec in CodecSpec::ALL {
            assert_eq!(spec.name().parse::<CodecSpec>().unwrap(), spec);
            assert_eq!(spec.to_string(), spec.name());
        }
    }

    #[test]
    fn parse_ignores_case_and_padding() {
        assert_eq!(" CRC32 ".parse::<CodecSpec>().unwrap(), CodecSpec::Crc32);
    }

    #[test]
    fn parse_unknown_name() {
        let err = "zstd".parse::<CodecSpec>().unwrap_err();
        assert_eq!(err, CodecError::Unknown("zstd".into()));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&[CodecSpec::Reverse, CodecSpec::Crc32]).unwrap();
        assert_eq!(json, r#"["reverse","crc32"]"#);
        let back: Vec<CodecSpec> = serde_json::from_str(r#"["hex","identity"]"#).unwrap();
        assert_eq!(back, [CodecSpec::Hex, CodecSpec::Identity]);
    }

    fn spec() -> impl Strategy<Value = CodecSpec> {
        prop::sample::select(CodecSpec::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn every_codec_round_trips(
            spec in spec(),
            payload in prop::collection::vec(any::<u8>(), 0..1024),
        ) {
            let raw = MemoryStore::new();
            let transformation = spec.transformation();
            write_bytes(&*transformation.apply(Box::new(&raw)), &payload).unwrap();
            let read = read_bytes(&*transformation.unapply(Box::new(&raw))).unwrap();
            prop_assert_eq!(read, payload);
        }
    }
}
