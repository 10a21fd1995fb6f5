use shared::domain::Configuration;

/// Receiver of applied configurations, owned by the panel's consumer.
///
/// Every call hands over an owned snapshot; later draft edits never reach a
/// configuration that was already applied.
pub trait ConfigurationSink {
    fn apply_configuration(&mut self, configuration: Configuration);
}

impl<F> ConfigurationSink for F
where
    F: FnMut(Configuration),
{
    fn apply_configuration(&mut self, configuration: Configuration) {
        self(configuration)
    }
}
