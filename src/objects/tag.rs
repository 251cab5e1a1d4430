//! Tag objects: the same KVLM grammar as commits, with conventional `object`,
//! `type`, `tag`, and `tagger` headers.

use super::kvlm::Kvlm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    kvlm: Kvlm,
}

impl Tag {
    pub fn new(kvlm: Kvlm) -> Self {
        Tag { kvlm }
    }

    pub fn parse(data: &[u8]) -> Tag {
        Tag {
            kvlm: Kvlm::parse(data),
        }
    }

    pub fn serialize(&self) -> Vec<u8> {
        self.kvlm.serialize()
    }

    pub fn kvlm(&self) -> &Kvlm {
        &self.kvlm
    }

    /// The identifier of the object this tag points at.
    pub fn object(&self) -> Option<String> {
        self.kvlm
            .get_one(b"object")
            .map(|v| String::from_utf8_lossy(v).into_owned())
    }

    /// The kind of object this tag points at (`commit`, `tree`, `blob`, `tag`).
    pub fn object_kind(&self) -> Option<String> {
        self.kvlm
            .get_one(b"type")
            .map(|v| String::from_utf8_lossy(v).into_owned())
    }

    pub fn name(&self) -> Option<String> {
        self.kvlm
            .get_one(b"tag")
            .map(|v| String::from_utf8_lossy(v).into_owned())
    }

    pub fn tagger(&self) -> Option<&[u8]> {
        self.kvlm.get_one(b"tagger")
    }

    pub fn message(&self) -> &[u8] {
        &self.kvlm.message
    }
}
