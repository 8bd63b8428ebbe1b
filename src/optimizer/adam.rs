/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : Adam 优化器（http://arxiv.org/abs/1412.6980v8）
 */

use super::base::{Optimizer, bias_corrected_lr};
use super::state::{Moments, SlotStore};
use super::{AdamConfig, OptimError, OptimizerState, ParamSet};

const EPSILON: f32 = 1e-7;

/// Adam: Adaptive Moment Estimation
///
/// 偏差修正并入学习率，而非分别修正两个矩：
/// - t = t + 1
/// - α_t = α * √(1 - β2^t) / (1 - β1^t)
/// - m = m + (1 - β1) * (∇θ - m)
/// - v = v + (1 - β2) * (∇θ² - v)
/// - θ = θ - α_t * m / (√v + 1e-7)
#[derive(Debug, Clone, Default)]
pub struct Adam {
    config: AdamConfig,
    state: SlotStore<Moments>,
}

impl Adam {
    const NAME: &'static str = "Adam";

    /// 创建新的 Adam 优化器
    ///
    /// # 参数
    /// - `lr`: 学习率
    /// - `beta1`: 一阶矩衰减率，须在[0, 1)内
    /// - `beta2`: 二阶矩衰减率，须在[0, 1)内
    pub fn new(lr: f32, beta1: f32, beta2: f32) -> Result<Self, OptimError> {
        Self::from_config(AdamConfig { lr, beta1, beta2 })
    }

    /// 使用缺省超参数（lr=0.001, β1=0.9, β2=0.999）创建
    pub fn new_default() -> Self {
        Self::default()
    }

    pub fn from_config(config: AdamConfig) -> Result<Self, OptimError> {
        config.validate()?;
        Ok(Self {
            config,
            state: SlotStore::default(),
        })
    }

    pub const fn config(&self) -> &AdamConfig {
        &self.config
    }

    /// 第`step`步（从1开始）所用的偏差修正学习率α_t
    pub fn corrected_learning_rate(&self, step: u64) -> f32 {
        let AdamConfig { lr, beta1, beta2 } = self.config;
        bias_corrected_lr(lr, beta1, beta2, step)
    }
}

impl Optimizer for Adam {
    fn update(&mut self, params: &mut ParamSet, grads: &ParamSet) -> Result<(), OptimError> {
        self.state.prepare(Self::NAME, params, grads)?;
        let AdamConfig { beta1, beta2, .. } = self.config;
        let t = self.state.advance();
        let lr_t = self.corrected_learning_rate(t);
        log::trace!("{}: 第{t}步，α_t={lr_t}", Self::NAME);

        for (param, grad, Moments { m, v }) in self.state.zip_mut(params, grads) {
            *m += &((grad - &*m) * (1.0 - beta1));
            *v += &((grad.square() - &*v) * (1.0 - beta2));
            *param -= &((&*m * lr_t) / (v.sqrt() + EPSILON));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn learning_rate(&self) -> f32 {
        self.config.lr
    }

    fn timestep(&self) -> u64 {
        self.state.step()
    }

    fn is_initialized(&self) -> bool {
        self.state.is_initialized()
    }

    fn state(&self) -> OptimizerState {
        self.state.snapshot()
    }

    fn load_state(&mut self, state: OptimizerState) -> Result<(), OptimError> {
        self.state.restore(Self::NAME, state, true)
    }
}
