//! File-wrapper capability.
//!
//! Chat frameworks usually want an attachment type rather than bare bytes.
//! Instead of probing for a specific framework at runtime, the client is
//! handed something that knows how to build that attachment. A client without
//! a wrapper always returns raw bytes.

use std::convert::Infallible;

/// Builds a framework file object out of downloaded bytes and a file name.
pub trait FileWrapper: Send + Sync {
    type File;

    fn wrap(&self, data: Vec<u8>, filename: String) -> Self::File;
}

/// Wrapper type of a client constructed without one. It has no values, so a
/// client carrying it never produces `Image::File`.
#[derive(Debug, Clone, Copy)]
pub enum NoWrapper {}

impl FileWrapper for NoWrapper {
    type File = Infallible;

    fn wrap(&self, _data: Vec<u8>, _filename: String) -> Self::File {
        match *self {}
    }
}

impl<W: FileWrapper + ?Sized> FileWrapper for std::sync::Arc<W> {
    type File = W::File;

    fn wrap(&self, data: Vec<u8>, filename: String) -> Self::File {
        (**self).wrap(data, filename)
    }
}

/// Plain in-memory file, handy for callers that only want the name alongside
/// the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedBytes {
    pub filename: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NamedBytesWrapper;

impl FileWrapper for NamedBytesWrapper {
    type File = NamedBytes;

    fn wrap(&self, data: Vec<u8>, filename: String) -> Self::File {
        NamedBytes { filename, data }
    }
}
