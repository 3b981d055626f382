use derive_more::Display;
use opentelemetry::{KeyValue, metrics::UpDownCounter};
use std::sync::LazyLock;

static STATDS: LazyLock<UpDownCounter<i64>> = LazyLock::new(|| {
    logfire::i64_up_down_counter("puppy_health_statds")
        .with_description("Puppy health app statistics")
        .with_unit("action")
        .build()
});

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    #[display("profile_created")]
    ProfileCreated,
    #[display("schedule_generated")]
    ScheduleGenerated,
    #[display("vaccine_administered")]
    VaccineAdministered,
    #[display("weight_logged")]
    WeightLogged,
    #[display("vitals_logged")]
    VitalsLogged,
    #[display("feeding_logged")]
    FeedingLogged,
    #[display("default_food_set")]
    DefaultFoodSet,
    #[display("export")]
    Export,
}

fn incr_statds(metric: String, value: String) {
    STATDS.add(1, &[KeyValue::new(metric, value)]);
}

pub fn incr_user_action_statds(action: UserAction) {
    incr_statds("user_action".to_string(), action.to_string())
}
