// Mount point trait - where a chart gets drawn
use crate::application::error::MountError;
use crate::domain::chart::ChartConfig;

pub trait ChartMount: Send + Sync {
    /// Element identifier of the mount point
    fn id(&self) -> &str;

    /// Replace whatever is drawn on the mount with `config`
    fn draw(&self, config: ChartConfig) -> Result<(), MountError>;
}
