//! 会话级注意力追踪器
//!
//! 每个动画帧调用一次 `update`：
//! - 有姿态：分类 → 更新分数/连击/等级/统计
//! - 无姿态（`poses` 为空或 `undefined`）：状态保持不变，不计时
//!
//! 升级事件通过 `onLevelUp` 注册的 JS 回调通知，仅用于庆祝动画。

use attention_hero::attention::config::AttentionConfig;
use attention_hero::attention::session::{TickOutcome, TrackingSession};
use attention_hero::attention::types::{FrameSize, Pose, PoseFrame};
use attention_hero::attention::Feedback;
use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// 单帧更新结果
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameResult {
    /// 本帧是否有姿态参与计算
    evaluated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<TickOutcome>,
    snapshot: attention_hero::attention::ProgressionSnapshot,
    feedback: Feedback,
}

/// 注意力追踪器
///
/// 一个实例对应一次追踪会话（"开始上课" → "结束上课"）。
#[wasm_bindgen]
pub struct AttentionTracker {
    /// `stop()` 之后为 `None`，之后的 `update` 不再改变状态
    session: Option<TrackingSession>,
    config: AttentionConfig,
    level_up_callback: Option<Function>,
}

#[wasm_bindgen]
impl AttentionTracker {
    /// 创建追踪器并开始会话
    ///
    /// # 参数
    /// - `config`: `AttentionConfig` 的 JS 对象，`undefined` 使用默认配置
    ///
    /// 配置非法（如 scoreMin >= scoreMax）时抛出异常
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<AttentionTracker, JsError> {
        let config: AttentionConfig = if config.is_undefined() || config.is_null() {
            AttentionConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let session = TrackingSession::start(config.clone())?;
        Ok(Self {
            session: Some(session),
            config,
            level_up_callback: None,
        })
    }

    /// 注册升级回调，参数为 `{ level, streak, frame }`
    #[wasm_bindgen(js_name = "onLevelUp")]
    pub fn on_level_up(&mut self, callback: Function) {
        self.level_up_callback = Some(callback);
    }

    /// 处理一帧
    ///
    /// # 参数
    /// - `poses`: 姿态模型输出的数组，仅使用第一个
    /// - `width` / `height`: 视频帧尺寸（像素）
    ///
    /// # 返回
    /// `{ evaluated, outcome?, snapshot, feedback }`
    pub fn update(&mut self, poses: JsValue, width: f64, height: f64) -> Result<JsValue, JsError> {
        let poses: Vec<Pose> = if poses.is_undefined() || poses.is_null() {
            Vec::new()
        } else {
            serde_wasm_bindgen::from_value(poses)?
        };
        let frame = PoseFrame {
            poses,
            frame: FrameSize::new(width, height),
        };

        let Some(session) = self.session.as_mut() else {
            return Err(JsError::new("tracking session has been stopped"));
        };
        let outcome = session.tick(Some(&frame));

        if let (Some(level_up), Some(callback)) = (
            outcome.as_ref().and_then(|o| o.level_up),
            self.level_up_callback.as_ref(),
        ) {
            let payload = serde_wasm_bindgen::to_value(&level_up)?;
            // 回调异常只影响动画，不影响追踪
            let _ = callback.call1(&JsValue::NULL, &payload);
        }

        let result = FrameResult {
            evaluated: outcome.is_some(),
            snapshot: session.snapshot(),
            feedback: session.feedback(),
            outcome,
        };
        Ok(serde_wasm_bindgen::to_value(&result)?)
    }

    /// 获取当前状态快照 `{ score, streak, level, metrics, verdict }`
    #[wasm_bindgen(js_name = "getSnapshot")]
    pub fn get_snapshot(&self) -> Result<JsValue, JsError> {
        match &self.session {
            Some(session) => Ok(serde_wasm_bindgen::to_value(&session.snapshot())?),
            None => Ok(JsValue::NULL),
        }
    }

    /// 获取展示用数据（进度条、提示语、距下一级帧数）
    #[wasm_bindgen(js_name = "getFeedback")]
    pub fn get_feedback(&self) -> Result<JsValue, JsError> {
        match &self.session {
            Some(session) => Ok(serde_wasm_bindgen::to_value(&session.feedback())?),
            None => Ok(JsValue::NULL),
        }
    }

    /// 是否仍在追踪
    #[wasm_bindgen(js_name = "isRunning")]
    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// 结束会话，返回最终报告；之后的 `update` 会抛出异常
    pub fn stop(&mut self) -> Result<JsValue, JsError> {
        self.level_up_callback = None;
        match self.session.take() {
            Some(session) => Ok(serde_wasm_bindgen::to_value(&session.finish())?),
            None => Ok(JsValue::NULL),
        }
    }

    /// 以相同配置重新开始会话（分数、连击、等级、统计全部清零）
    pub fn reset(&mut self) -> Result<(), JsError> {
        self.session = Some(TrackingSession::start(self.config.clone())?);
        Ok(())
    }
}
