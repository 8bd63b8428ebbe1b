/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : AdaStandard 优化器
 */

use super::base::{Optimizer, bias_corrected_lr};
use super::state::{Moments, SlotStore};
use super::{AdaStandardConfig, OptimError, OptimizerState, ParamSet};

/// AdaStandard：以中心化的二阶矩（近似方差）代替 Adam 的二阶原点矩
///
/// 与 Adam 相反，先更新 v 再更新 m，且 m 的递推为`∇θ - 2m`而非`∇θ - m`：
/// - t = t + 1
/// - α_t = α * √(1 - β2^t) / (1 - β1^t)
/// - v = v + (1 - β2) * (β2 * (∇θ - m)² - v)
/// - m = m + (1 - β1) * (∇θ - 2 * m)
/// - θ = θ - α_t * m / (√v + ε)
#[derive(Debug, Clone, Default)]
pub struct AdaStandard {
    config: AdaStandardConfig,
    state: SlotStore<Moments>,
}

impl AdaStandard {
    const NAME: &'static str = "AdaStandard";

    /// 创建新的 AdaStandard 优化器
    ///
    /// # 参数
    /// - `lr`: 学习率
    /// - `beta1`: 一阶矩衰减率，须在[0, 1)内
    /// - `beta2`: 二阶矩衰减率，须在[0, 1)内
    /// - `epsilon`: 分母平滑项，须为正数
    pub fn new(lr: f32, beta1: f32, beta2: f32, epsilon: f32) -> Result<Self, OptimError> {
        Self::from_config(AdaStandardConfig {
            lr,
            beta1,
            beta2,
            epsilon,
        })
    }

    /// 使用缺省超参数（lr=0.001, β1=0.7, β2=0.99, ε=1e-7）创建
    pub fn new_default() -> Self {
        Self::default()
    }

    pub fn from_config(config: AdaStandardConfig) -> Result<Self, OptimError> {
        config.validate()?;
        Ok(Self {
            config,
            state: SlotStore::default(),
        })
    }

    pub const fn config(&self) -> &AdaStandardConfig {
        &self.config
    }
}

impl Optimizer for AdaStandard {
    fn update(&mut self, params: &mut ParamSet, grads: &ParamSet) -> Result<(), OptimError> {
        self.state.prepare(Self::NAME, params, grads)?;
        let AdaStandardConfig {
            lr,
            beta1,
            beta2,
            epsilon,
        } = self.config;
        let t = self.state.advance();
        let lr_t = bias_corrected_lr(lr, beta1, beta2, t);
        log::trace!("{}: 第{t}步，α_t={lr_t}", Self::NAME);

        for (param, grad, Moments { m, v }) in self.state.zip_mut(params, grads) {
            *v += &(((grad - &*m).square() * beta2 - &*v) * (1.0 - beta2));
            *m += &((grad - &(&*m * 2.0)) * (1.0 - beta1));
            *param -= &((&*m * lr_t) / (v.sqrt() + epsilon));
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
