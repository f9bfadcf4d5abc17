//! 单帧姿态分类
//!
//! 输入为姿态模型（MoveNet / PoseNet）输出的关键点数组，按名称查找
//! 鼻子、双眼（以及肩膀），返回是否专注。缺失或低置信度的关键点
//! 视为"不专注"，不会抛出异常。

use attention_hero::attention::classifier::{AttentionClassifier, ClassifierStrategy};
use attention_hero::attention::config::ClassifierConfig;
use attention_hero::attention::types::{FrameSize, Pose};
use wasm_bindgen::prelude::*;

/// 姿态分类器
///
/// 阈值在构造时确定，分类本身是纯函数。
#[wasm_bindgen]
pub struct PoseClassifier {
    inner: AttentionClassifier,
}

#[wasm_bindgen]
impl PoseClassifier {
    /// 创建分类器
    ///
    /// # 参数
    /// - `config`: `ClassifierConfig` 的 JS 对象（camelCase 字段），
    ///   传 `undefined` / `null` 使用默认阈值
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<PoseClassifier, JsError> {
        let config: ClassifierConfig = if config.is_undefined() || config.is_null() {
            ClassifierConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        config.validate()?;
        Ok(Self {
            inner: AttentionClassifier::new(config),
        })
    }

    /// 判断单帧姿态是否专注
    ///
    /// # 参数
    /// - `pose`: `{ keypoints: [{ name, x, y, score }], score }`
    /// - `width` / `height`: 视频帧尺寸（像素）
    pub fn classify(&self, pose: JsValue, width: f64, height: f64) -> Result<bool, JsError> {
        let pose: Pose = serde_wasm_bindgen::from_value(pose)?;
        Ok(self
            .inner
            .classify(&pose, FrameSize::new(width, height))
            .is_attentive())
    }

    /// 返回各判定门的明细 `{ visible, oriented, upright, verdict }`
    pub fn assess(&self, pose: JsValue, width: f64, height: f64) -> Result<JsValue, JsError> {
        let pose: Pose = serde_wasm_bindgen::from_value(pose)?;
        let assessment = self.inner.assess(&pose, FrameSize::new(width, height));
        Ok(serde_wasm_bindgen::to_value(&assessment)?)
    }

    /// 当前策略: "strict" | "lenient" | "upright"
    #[wasm_bindgen(getter)]
    pub fn strategy(&self) -> String {
        self.inner.strategy().as_str().to_string()
    }
}

/// 解析策略名，未知名称返回 `undefined`
#[wasm_bindgen(js_name = "parseStrategy")]
pub fn parse_strategy(raw: &str) -> Option<String> {
    ClassifierStrategy::parse(raw).map(|s| s.as_str().to_string())
}
