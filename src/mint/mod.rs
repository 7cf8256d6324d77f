//! Upload-and-mint pipeline
//!
//! One uploaded file flows through four external steps plus a local write:
//! pin the file to IPFS, pin the metadata JSON, call the contract's mint
//! function, persist the transaction record. The steps are strictly
//! sequential; a failure in the external steps aborts the run with no retry
//! and no cleanup of anything already pinned.

mod client;
mod model;
mod recorder;
mod service;

pub use client::{StartonClient, StartonError};
pub use model::{
    MintCall, MintOutcome, MintTransaction, NewMintTransaction, NftMetadata, PinResponse,
    UploadedFile,
};
pub use recorder::{PgTransactionRecorder, TransactionRecorder};
pub use service::MintService;
