/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 优化器模块：一族一阶随机优化算法，统一以`update(params, grads)`原地更新参数。
 *
 * | 优化器 | 累积状态 | 时间步 |
 * |-------|---------|-------|
 * | SGD | 无 | 否 |
 * | Momentum / Nesterov | v | 否 |
 * | AdaGrad / RMSprop | h | 否 |
 * | Adam / AdaStandard | m, v | 是 |
 * | SDProp | m, c | 仅开启偏差修正时 |
 */

mod ada_standard;
mod adagrad;
mod adam;
mod base;
mod config;
mod error;
mod momentum;
mod nesterov;
mod rmsprop;
mod sdprop;
mod sgd;
mod state;

#[cfg(test)]
mod tests;

pub use ada_standard::AdaStandard;
pub use adagrad::AdaGrad;
pub use adam::Adam;
pub use base::{AnyOptimizer, Optimizer, ParamSet};
pub use config::{
    AdaGradConfig, AdaStandardConfig, AdamConfig, MomentumConfig, NesterovConfig,
    OptimizerConfig, RMSpropConfig, SDPropConfig, SGDConfig,
};
pub use error::OptimError;
pub use momentum::Momentum;
pub use nesterov::Nesterov;
pub use rmsprop::RMSprop;
pub use sdprop::SDProp;
pub use sgd::SGD;
pub use state::{OptimizerState, StateEntry};
