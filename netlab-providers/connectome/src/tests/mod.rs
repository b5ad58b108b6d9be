pub(crate) use super::{
    CachePolicy, CleanError, ConnectomeError, ConnectomeLoader, RoiConnection, RoiSupersetMapping,
    TreatedSource,
};

mod clean;
