/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 优化器核心 trait 和辅助函数
 */

use std::collections::BTreeMap;

use enum_dispatch::enum_dispatch;

use super::{
    AdaGrad, AdaStandard, Adam, Momentum, Nesterov, OptimError, OptimizerState, RMSprop, SDProp,
    SGD,
};
use crate::tensor::Tensor;

/// 参数集合（或梯度集合）：参数键到张量的映射
///
/// 键按字典序排列，保证每次`update`中各参数的处理顺序固定。
pub type ParamSet = BTreeMap<String, Tensor>;

/// 优化器核心 trait
///
/// 训练循环中的用法：
/// ```ignore
/// let mut optimizer = Adam::new_default();
/// for _ in 0..epochs {
///     let grads = model.backward(&params, &batch);
///     optimizer.update(&mut params, &grads)?;
/// }
/// ```
#[enum_dispatch]
pub trait Optimizer {
    /// 参数更新：按各优化器的公式原地修改`params`。
    ///
    /// `grads`须与`params`具有完全相同的键和逐键形状；首次调用后，键集合与各键形状
    /// 即被固定。违反约定时返回错误，且返回前`params`不会被修改。
    fn update(&mut self, params: &mut ParamSet, grads: &ParamSet) -> Result<(), OptimError>;

    /// 优化器名称
    fn name(&self) -> &'static str;

    /// 获取学习率
    fn learning_rate(&self) -> f32;

    /// 当前时间步（不需要偏差修正的优化器始终为0）
    fn timestep(&self) -> u64;

    /// 累积状态是否已初始化（即是否执行过一次成功的`update`）
    fn is_initialized(&self) -> bool;

    /// 导出累积状态快照
    fn state(&self) -> OptimizerState;

    /// 载入累积状态快照
    fn load_state(&mut self, state: OptimizerState) -> Result<(), OptimError>;
}

/// 可在运行时选择具体算法的优化器
///
/// 通常由[`OptimizerConfig::build`](super::OptimizerConfig::build)构造。
#[enum_dispatch(Optimizer)]
#[derive(Debug, Clone)]
pub enum AnyOptimizer {
    SGD,
    Momentum,
    Nesterov,
    AdaGrad,
    RMSprop,
    Adam,
    SDProp,
    AdaStandard,
}

/// `rate^step`，`step`超出`i32`范围时按`i32::MAX`计（此时结果已为0）
pub(crate) fn decay_pow(rate: f32, step: u64) -> f32 {
    rate.powi(i32::try_from(step).unwrap_or(i32::MAX))
}

/// Adam 类偏差修正后的学习率：`lr * sqrt(1 - β2^t) / (1 - β1^t)`
pub(crate) fn bias_corrected_lr(lr: f32, beta1: f32, beta2: f32, step: u64) -> f32 {
    lr * (1.0 - decay_pow(beta2, step)).sqrt() / (1.0 - decay_pow(beta1, step))
}
