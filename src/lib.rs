#![doc = r#"
augzip — fixed-set image augmentation packed into a ZIP of JPEGs.

Every uploaded image goes through the same seven transformations, each applied
to the original (never chained): rotate 90°, 180°, 270° clockwise, horizontal
flip, vertical flip, an 80% center crop resized back to the original size, and
a random brightness/contrast jitter. All derived images of a request are
encoded as JPEG and stored in one archive as `augmented_0.jpg`,
`augmented_1.jpg`, … in order.

Channel order
-------------
Frames carry their `ChannelOrder`. The pipeline works in `PIPELINE_ORDER`
(RGB) and converts on entry; the JPEG writer is fed `ENCODER_ORDER` (BGR) and
converts per frame. Nothing else swaps channels.

Augment and assemble
--------------------
```rust
use augzip::{ChannelOrder, Frame, assemble, augment};

fn main() -> augzip::Result<()> {
    let frame = Frame::filled(100, 100, ChannelOrder::Rgb, [120, 80, 40])?;
    let derived = augment(&frame)?;
    assert_eq!(derived.len(), 7);

    let archive = assemble(&derived)?;
    assert_eq!(archive.position(), 0);
    Ok(())
}
```

Reproducible jitter
-------------------
```rust
use augzip::{ChannelOrder, Frame, PipelineParams, augment_with_rng, pipeline_rng};

fn main() -> augzip::Result<()> {
    let frame = Frame::filled(32, 24, ChannelOrder::Rgb, [10, 20, 30])?;
    let params = PipelineParams { seed: Some(7), ..PipelineParams::default() };
    let a = augment_with_rng(&frame, &params, &mut pipeline_rng(&params))?;
    let b = augment_with_rng(&frame, &params, &mut pipeline_rng(&params))?;
    assert_eq!(a, b);
    Ok(())
}
```

Handling a request's uploads
----------------------------
```rust,no_run
use augzip::UploadConfig;
use augzip::api::{Upload, handle_upload};

fn main() -> augzip::Result<()> {
    let uploads = vec![Upload::from_path(std::path::Path::new("cat.jpg"))?];
    let response = handle_upload(&uploads, &UploadConfig::default())?;
    println!("{} ({})", response.file_name, response.mime_type);
    Ok(())
}
```

Useful modules
--------------
- [`api`] — upload filtering, staging, and end-to-end request handling.
- [`core`] — `Frame`, parameters, and the processing primitives.
- [`io`] — decoding and the JPEG/archive writers.
- [`error`] — crate-level `Error` and `Result`.
- `server` — axum routes (`GET /`, `POST /upload`), behind the `serve` feature.

Feature flags
-------------
- `serve` (default): builds the `server` module and the `augzip-server` binary.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// HTTP front end (only available with serve feature)
#[cfg(feature = "serve")]
pub mod server;

// Types
pub use crate::core::frame::Frame;
pub use crate::core::params::{PipelineParams, UploadConfig};
pub use error::{Error, Result};
pub use types::{Augmentation, ChannelOrder, ENCODER_ORDER, PIPELINE_ORDER};

// Pipeline and archive
pub use crate::core::processing::pipeline::{
    AUGMENTATIONS, DERIVED_PER_IMAGE, augment, augment_with_rng, pipeline_rng,
};
pub use io::writers::archive::{assemble, assemble_with_quality, entry_name};
pub use io::{decode_bytes, decode_file};

// High-level API re-exports
pub use api::{ArchiveResponse, Upload, handle_upload, handle_upload_with_rng};
