/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 各优化器的超参数配置及其合法性校验。
 *
 * 所有配置在构造优化器时即被校验（而非推迟到首次`update`），缺省值与各算法文档一致。
 * 配置可经 serde 从 JSON 读入，未给出的字段取缺省值：
 * ```ignore
 * let optimizer = OptimizerConfig::from_json(r#"{"kind": "adam", "lr": 0.01}"#)?.build()?;
 * ```
 */

use serde::{Deserialize, Serialize};

use super::{
    AdaGrad, AdaStandard, Adam, AnyOptimizer, Momentum, Nesterov, OptimError, RMSprop, SDProp,
    SGD,
};
use crate::errors::ComparisonOperator;

/// 学习率须为有限正数
fn check_learning_rate(name: &'static str, value: f32) -> Result<(), OptimError> {
    if value.is_finite() && ComparisonOperator::GreaterThan.holds(value, 0.0) {
        Ok(())
    } else {
        Err(OptimError::config_compare(
            name,
            value,
            ComparisonOperator::GreaterThan,
            0.0,
        ))
    }
}

/// 衰减率须在[0, 1)内
fn check_decay_rate(name: &'static str, value: f32) -> Result<(), OptimError> {
    if !ComparisonOperator::GreaterOrEqual.holds(value, 0.0) {
        return Err(OptimError::config_compare(
            name,
            value,
            ComparisonOperator::GreaterOrEqual,
            0.0,
        ));
    }
    if !ComparisonOperator::LessThan.holds(value, 1.0) {
        return Err(OptimError::config_compare(
            name,
            value,
            ComparisonOperator::LessThan,
            1.0,
        ));
    }
    Ok(())
}

/*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓各优化器配置↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SGDConfig {
    pub lr: f32,
}

impl Default for SGDConfig {
    fn default() -> Self {
        Self { lr: 0.01 }
    }
}

impl SGDConfig {
    pub fn validate(&self) -> Result<(), OptimError> {
        check_learning_rate("lr", self.lr)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MomentumConfig {
    pub lr: f32,
    pub momentum: f32,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            lr: 0.01,
            momentum: 0.9,
        }
    }
}

impl MomentumConfig {
    pub fn validate(&self) -> Result<(), OptimError> {
        check_learning_rate("lr", self.lr)?;
        check_decay_rate("momentum", self.momentum)
    }
}

/// Nesterov 与 Momentum 的超参数相同
pub type NesterovConfig = MomentumConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaGradConfig {
    pub lr: f32,
}

impl Default for AdaGradConfig {
    fn default() -> Self {
        Self { lr: 0.01 }
    }
}

impl AdaGradConfig {
    pub fn validate(&self) -> Result<(), OptimError> {
        check_learning_rate("lr", self.lr)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RMSpropConfig {
    pub lr: f32,
    pub decay_rate: f32,
}

impl Default for RMSpropConfig {
    fn default() -> Self {
        Self {
            lr: 0.001,
            decay_rate: 0.99,
        }
    }
}

impl RMSpropConfig {
    pub fn validate(&self) -> Result<(), OptimError> {
        check_learning_rate("lr", self.lr)?;
        check_decay_rate("decay_rate", self.decay_rate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdamConfig {
    pub lr: f32,
    pub beta1: f32,
    pub beta2: f32,
}

impl Default for AdamConfig {
    fn default() -> Self {
        Self {
            lr: 0.001,
            beta1: 0.9,
            beta2: 0.999,
        }
    }
}

impl AdamConfig {
    pub fn validate(&self) -> Result<(), OptimError> {
        check_learning_rate("lr", self.lr)?;
        check_decay_rate("beta1", self.beta1)?;
        check_decay_rate("beta2", self.beta2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SDPropConfig {
    pub lr: f32,
    pub gamma: f32,
    pub bias_correction: bool,
}

impl Default for SDPropConfig {
    fn default() -> Self {
        Self {
            lr: 0.001,
            gamma: 0.99,
            bias_correction: true,
        }
    }
}

impl SDPropConfig {
    pub fn validate(&self) -> Result<(), OptimError> {
        check_learning_rate("lr", self.lr)?;
        check_decay_rate("gamma", self.gamma)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaStandardConfig {
    pub lr: f32,
    pub beta1: f32,
    pub beta2: f32,
    pub epsilon: f32,
}

impl Default for AdaStandardConfig {
    fn default() -> Self {
        Self {
            lr: 0.001,
            beta1: 0.7,
            beta2: 0.99,
            epsilon: 1e-7,
        }
    }
}

impl AdaStandardConfig {
    pub fn validate(&self) -> Result<(), OptimError> {
        check_learning_rate("lr", self.lr)?;
        check_decay_rate("beta1", self.beta1)?;
        check_decay_rate("beta2", self.beta2)?;
        // epsilon 与学习率的约束相同：有限正数
        check_learning_rate("epsilon", self.epsilon)
    }
}
/*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑各优化器配置↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

/// 带算法种类标签的优化器配置，用于在运行时选择算法
///
/// JSON 形式如`{"kind": "rmsprop", "lr": 0.001, "decay_rate": 0.9}`。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptimizerConfig {
    Sgd(SGDConfig),
    Momentum(MomentumConfig),
    Nesterov(NesterovConfig),
    #[serde(rename = "adagrad")]
    AdaGrad(AdaGradConfig),
    #[serde(rename = "rmsprop")]
    RMSprop(RMSpropConfig),
    Adam(AdamConfig),
    #[serde(rename = "sdprop")]
    SDProp(SDPropConfig),
    #[serde(alias = "adastand")]
    AdaStandard(AdaStandardConfig),
}

impl OptimizerConfig {
    pub fn from_json(json: &str) -> Result<Self, OptimError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, OptimError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), OptimError> {
        match self {
            Self::Sgd(config) => config.validate(),
            Self::Momentum(config) | Self::Nesterov(config) => config.validate(),
            Self::AdaGrad(config) => config.validate(),
            Self::RMSprop(config) => config.validate(),
            Self::Adam(config) => config.validate(),
            Self::SDProp(config) => config.validate(),
            Self::AdaStandard(config) => config.validate(),
        }
    }

    /// 校验配置并构造对应的优化器
    pub fn build(&self) -> Result<AnyOptimizer, OptimError> {
        let optimizer: AnyOptimizer = match *self {
            Self::Sgd(config) => SGD::from_config(config)?.into(),
            Self::Momentum(config) => Momentum::from_config(config)?.into(),
            Self::Nesterov(config) => Nesterov::from_config(config)?.into(),
            Self::AdaGrad(config) => AdaGrad::from_config(config)?.into(),
            Self::RMSprop(config) => RMSprop::from_config(config)?.into(),
            Self::Adam(config) => Adam::from_config(config)?.into(),
            Self::SDProp(config) => SDProp::from_config(config)?.into(),
            Self::AdaStandard(config) => AdaStandard::from_config(config)?.into(),
        };
        Ok(optimizer)
    }
}
