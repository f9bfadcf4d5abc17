//! 注意力追踪 WASM 绑定
//!
//! 将 `attention_hero::attention` 核心（姿态分类 + 分数/连击/等级推进）
//! 编译为 WebAssembly，供浏览器端在每个动画帧调用。
//!
//! ## 模块
//! - `classifier`: 单帧姿态分类（纯函数）
//! - `tracker`: 会话级追踪器，持有进度状态并报告升级事件

pub mod classifier;
pub mod tracker;

pub use classifier::PoseClassifier;
pub use tracker::AttentionTracker;
