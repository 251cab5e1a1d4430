//! Blob objects: uninterpreted byte payloads.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    data: Vec<u8>,
}

impl Blob {
    pub fn new(data: Vec<u8>) -> Self {
        Blob { data }
    }

    pub fn parse(data: &[u8]) -> Blob {
        Blob {
            data: data.to_vec(),
        }
    }

    pub fn serialize(&self) -> Vec<u8> {
        self.data.clone()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
