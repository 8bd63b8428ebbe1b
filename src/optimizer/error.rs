/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 优化器模块的错误类型
 */

use thiserror::Error;

use crate::errors::ComparisonOperator;

/// 优化器操作错误类型
///
/// 所有错误都在检测到的那次调用中同步返回，且返回前参数不会被修改。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptimError {
    /// 梯度集合的键与参数集合的键不一致
    #[error("梯度与参数的键不一致：梯度中缺少{missing:?}，梯度中多出{unexpected:?}")]
    KeyMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
    /// 某个键对应的张量形状与梯度（或首次更新时记录的形状）不一致
    #[error("参数`{key}`的形状不一致：预期{expected:?}，实际为{got:?}")]
    ShapeMismatch {
        key: String,
        expected: Vec<usize>,
        got: Vec<usize>,
    },
    /// 累积状态已初始化后，参数集合的键发生了变化
    #[error("参数的键与已初始化的累积状态不一致：缺少{missing:?}，多出{unexpected:?}")]
    StateMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
    /// 超参数不在其合法取值范围内
    #[error("超参数`{name}`须{requirement}，实际为{value}")]
    Config {
        name: &'static str,
        value: f32,
        requirement: String,
    },
    /// 载入的状态快照与本优化器的状态结构不符
    #[error("无效的优化器状态：{0}")]
    InvalidState(String),
    /// 状态快照的（反）序列化失败
    #[error("优化器状态（反）序列化失败：{0}")]
    Serialization(String),
    /// 状态快照读写文件失败
    #[error("优化器状态读写失败：{0}")]
    Io(String),
}

impl OptimError {
    /// 生成“`value` 须 `operator` `threshold`”形式的超参数错误
    pub(crate) fn config_compare(
        name: &'static str,
        value: f32,
        operator: ComparisonOperator,
        threshold: f32,
    ) -> Self {
        OptimError::Config {
            name,
            value,
            requirement: format!("{operator}{threshold}"),
        }
    }
}

impl From<std::io::Error> for OptimError {
    fn from(e: std::io::Error) -> Self {
        OptimError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for OptimError {
    fn from(e: serde_json::Error) -> Self {
        OptimError::Serialization(e.to_string())
    }
}

impl From<bincode::Error> for OptimError {
    fn from(e: bincode::Error) -> Self {
        OptimError::Serialization(e.to_string())
    }
}
