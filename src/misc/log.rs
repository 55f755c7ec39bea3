/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made at the points where something worth inspecting happens: reduction steps, memo store traffic, and codec complaints.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    pub const EVAL: &str = "eval";
    pub const CODEC: &str = "codec";
    pub const MEMO: &str = "memo";
    pub const SPLICE: &str = "splice";
}
