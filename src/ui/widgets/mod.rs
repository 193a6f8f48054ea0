//! Controls and presentational containers.

pub mod alert;
pub mod badge;
pub mod card;
pub mod label;
pub mod pressable;
pub mod progress;
pub mod radio;
pub mod select;
pub mod separator;
pub mod switch;
pub mod tabs;
pub mod textarea;

pub use alert::Alert;
pub use badge::Badge;
pub use card::Card;
pub use label::FieldLabel;
pub use pressable::MotionPressable;
pub use progress::{clamp_percent, Progress};
pub use radio::{RadioGroup, RadioGroupResponse, RadioGroupScope, RadioOption, RadioVariant};
pub use select::Select;
pub use separator::{Orientation, Separator};
pub use switch::Switch;
pub use tabs::{Tabs, TabsError, TabsScope};
pub use textarea::Textarea;
