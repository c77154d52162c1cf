pub use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, RwLock,
    },
};

pub use tokio::task::JoinHandle;
pub use tokio::time::{interval, Duration, Interval};

pub use anyhow::anyhow;
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::{Getters, Setters};
pub use log::{error, info, warn};
pub use serde::{de::DeserializeOwned, Deserialize, Serialize};
pub use thiserror::Error;
