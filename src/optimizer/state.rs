/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 优化器累积状态（速度、平方梯度、一/二阶矩、协方差等）的惰性管理，
 *                 以及可序列化的状态快照。
 *
 * 状态只有两种：未初始化（`entries == None`）和已初始化。首次`update`时按参数的键和
 * 形状分配全零的累积张量，此后键集合与各键形状即被固定，任何变化都会报错而不是被静默接受。
 */

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use super::{OptimError, ParamSet};
use crate::tensor::Tensor;

/// 单个参数所附带的一组累积张量
///
/// `NAMES`的顺序即`tensors()`/`from_tensors()`中张量的顺序。
pub(crate) trait Slots: Sized {
    const NAMES: &'static [&'static str];

    /// 按参数形状分配全零的累积张量
    fn zeros(shape: &[usize]) -> Self;

    fn tensors(&self) -> Vec<&Tensor>;

    /// 个数不符时返回`None`
    fn from_tensors(tensors: Vec<Tensor>) -> Option<Self>;
}

/// 无累积状态（SGD）
#[derive(Debug, Clone)]
pub(crate) struct NoSlots;

impl Slots for NoSlots {
    const NAMES: &'static [&'static str] = &[];

    fn zeros(_shape: &[usize]) -> Self {
        NoSlots
    }

    fn tensors(&self) -> Vec<&Tensor> {
        vec![]
    }

    fn from_tensors(tensors: Vec<Tensor>) -> Option<Self> {
        tensors.is_empty().then_some(NoSlots)
    }
}

/// 速度`v`（Momentum、Nesterov）
#[derive(Debug, Clone)]
pub(crate) struct Velocity {
    pub(crate) v: Tensor,
}

impl Slots for Velocity {
    const NAMES: &'static [&'static str] = &["v"];

    fn zeros(shape: &[usize]) -> Self {
        Self {
            v: Tensor::zeros(shape),
        }
    }

    fn tensors(&self) -> Vec<&Tensor> {
        vec![&self.v]
    }

    fn from_tensors(tensors: Vec<Tensor>) -> Option<Self> {
        let [v]: [Tensor; 1] = tensors.try_into().ok()?;
        Some(Self { v })
    }
}

/// 平方梯度累积`h`（AdaGrad、RMSprop）
#[derive(Debug, Clone)]
pub(crate) struct SquaredGrad {
    pub(crate) h: Tensor,
}

impl Slots for SquaredGrad {
    const NAMES: &'static [&'static str] = &["h"];

    fn zeros(shape: &[usize]) -> Self {
        Self {
            h: Tensor::zeros(shape),
        }
    }

    fn tensors(&self) -> Vec<&Tensor> {
        vec![&self.h]
    }

    fn from_tensors(tensors: Vec<Tensor>) -> Option<Self> {
        let [h]: [Tensor; 1] = tensors.try_into().ok()?;
        Some(Self { h })
    }
}

/// 一阶矩`m`与二阶矩`v`（Adam、AdaStandard）
#[derive(Debug, Clone)]
pub(crate) struct Moments {
    pub(crate) m: Tensor,
    pub(crate) v: Tensor,
}

impl Slots for Moments {
    const NAMES: &'static [&'static str] = &["m", "v"];

    fn zeros(shape: &[usize]) -> Self {
        Self {
            m: Tensor::zeros(shape),
            v: Tensor::zeros(shape),
        }
    }

    fn tensors(&self) -> Vec<&Tensor> {
        vec![&self.m, &self.v]
    }

    fn from_tensors(tensors: Vec<Tensor>) -> Option<Self> {
        let [m, v]: [Tensor; 2] = tensors.try_into().ok()?;
        Some(Self { m, v })
    }
}

/// 均值`m`（μ）与协方差估计`c`（C²）（SDProp）
#[derive(Debug, Clone)]
pub(crate) struct MeanCovariance {
    pub(crate) m: Tensor,
    pub(crate) c: Tensor,
}

impl Slots for MeanCovariance {
    const NAMES: &'static [&'static str] = &["m", "c"];

    fn zeros(shape: &[usize]) -> Self {
        Self {
            m: Tensor::zeros(shape),
            c: Tensor::zeros(shape),
        }
    }

    fn tensors(&self) -> Vec<&Tensor> {
        vec![&self.m, &self.c]
    }

    fn from_tensors(tensors: Vec<Tensor>) -> Option<Self> {
        let [m, c]: [Tensor; 2] = tensors.try_into().ok()?;
        Some(Self { m, c })
    }
}

#[derive(Debug, Clone)]
struct Entry<S> {
    shape: Vec<usize>,
    slots: S,
}

/// 优化器实例独占的累积状态和时间步
#[derive(Debug, Clone)]
pub(crate) struct SlotStore<S> {
    /// `None`表示尚未初始化
    entries: Option<BTreeMap<String, Entry<S>>>,
    /// 时间步，只增不减（仅需要偏差修正的优化器会推进它）
    step: u64,
}

impl<S> Default for SlotStore<S> {
    fn default() -> Self {
        Self {
            entries: None,
            step: 0,
        }
    }
}

impl<S: Slots> SlotStore<S> {
    pub(crate) const fn is_initialized(&self) -> bool {
        self.entries.is_some()
    }

    pub(crate) const fn step(&self) -> u64 {
        self.step
    }

    /// 推进时间步并返回推进后的值
    pub(crate) fn advance(&mut self) -> u64 {
        self.step += 1;
        self.step
    }

    /// 校验本次`update`的参数与梯度，首次调用时惰性分配累积状态。
    ///
    /// 所有校验都在修改任何东西之前完成：返回`Err`时参数与状态均保持原样。
    pub(crate) fn prepare(
        &mut self,
        optimizer: &str,
        params: &ParamSet,
        grads: &ParamSet,
    ) -> Result<(), OptimError> {
        // 1. 梯度与参数的键必须一致
        let (missing, unexpected) = diff_keys(
            params.keys().map(String::as_str),
            grads.keys().map(String::as_str),
        );
        if !missing.is_empty() || !unexpected.is_empty() {
            return Err(OptimError::KeyMismatch {
                missing,
                unexpected,
            });
        }

        // 2. 梯度与参数逐键同形状（键已一致，两个有序映射按位置一一对应）
        for ((key, param), grad) in params.iter().zip(grads.values()) {
            if !param.is_same_shape(grad) {
                return Err(OptimError::ShapeMismatch {
                    key: key.clone(),
                    expected: param.shape().to_vec(),
                    got: grad.shape().to_vec(),
                });
            }
        }

        match &self.entries {
            // 3. 已初始化：键集合与各键形状须与首次记录的一致
            Some(entries) => {
                let (missing, unexpected) = diff_keys(
                    entries.keys().map(String::as_str),
                    params.keys().map(String::as_str),
                );
                if !missing.is_empty() || !unexpected.is_empty() {
                    return Err(OptimError::StateMismatch {
                        missing,
                        unexpected,
                    });
                }
                for ((key, entry), param) in entries.iter().zip(params.values()) {
                    let shape = param.shape();
                    if entry.shape != shape {
                        return Err(OptimError::ShapeMismatch {
                            key: key.clone(),
                            expected: entry.shape.clone(),
                            got: shape.to_vec(),
                        });
                    }
                }
            }
            // 4. 未初始化：按参数分配全零状态
            None => {
                let entries = params
                    .iter()
                    .map(|(key, param)| {
                        let entry = Entry {
                            shape: param.shape().to_vec(),
                            slots: S::zeros(param.shape()),
                        };
                        (key.clone(), entry)
                    })
                    .collect::<BTreeMap<_, _>>();
                log::debug!(
                    "{optimizer}: 初始化累积状态{:?}，共{}个参数、{}个元素",
                    S::NAMES,
                    entries.len(),
                    params.values().map(Tensor::size).sum::<usize>()
                );
                self.entries = Some(entries);
            }
        }
        Ok(())
    }

    /// 按键的顺序同时遍历参数、梯度与累积状态。
    ///
    /// 须在`prepare`成功之后调用，此时三者的键集合完全一致。
    pub(crate) fn zip_mut<'a>(
        &'a mut self,
        params: &'a mut ParamSet,
        grads: &'a ParamSet,
    ) -> impl Iterator<Item = (&'a mut Tensor, &'a Tensor, &'a mut S)> + 'a {
        let slots = self
            .entries
            .iter_mut()
            .flat_map(|entries| entries.values_mut())
            .map(|entry| &mut entry.slots);
        params
            .values_mut()
            .zip(grads.values())
            .zip(slots)
            .map(|((param, grad), slots)| (param, grad, slots))
    }

    /// 导出状态快照（深拷贝）
    pub(crate) fn snapshot(&self) -> OptimizerState {
        let entries = self.entries.as_ref().map(|entries| {
            entries
                .iter()
                .map(|(key, entry)| {
                    let slots = S::NAMES
                        .iter()
                        .zip(entry.slots.tensors())
                        .map(|(name, tensor)| (name.to_string(), tensor.clone()))
                        .collect();
                    let state = StateEntry {
                        shape: entry.shape.clone(),
                        slots,
                    };
                    (key.clone(), state)
                })
                .collect()
        });
        OptimizerState {
            step: self.step,
            entries,
        }
    }

    /// 从状态快照恢复。快照结构不符时返回错误且不修改当前状态。
    ///
    /// `advances_step`为`false`的优化器从不推进时间步，只接受`step == 0`的快照。
    pub(crate) fn restore(
        &mut self,
        optimizer: &str,
        state: OptimizerState,
        advances_step: bool,
    ) -> Result<(), OptimError> {
        if !advances_step && state.step != 0 {
            return Err(OptimError::InvalidState(format!(
                "{optimizer}不使用时间步，快照中的时间步须为0，实际为{}",
                state.step
            )));
        }
        let slot_names = S::NAMES.iter().copied().collect::<BTreeSet<_>>();
        let entries = match state.entries {
            None => None,
            Some(snapshot) => {
                let mut entries = BTreeMap::new();
                for (key, mut entry) in snapshot {
                    let (missing, unexpected) = diff_keys(
                        slot_names.iter().copied(),
                        entry.slots.keys().map(String::as_str),
                    );
                    if !missing.is_empty() || !unexpected.is_empty() {
                        return Err(OptimError::InvalidState(format!(
                            "参数`{key}`的累积张量应为{:?}，缺少{missing:?}，多出{unexpected:?}",
                            S::NAMES
                        )));
                    }
                    let mut tensors = Vec::with_capacity(S::NAMES.len());
                    for name in S::NAMES {
                        let tensor = entry.slots.remove(*name).ok_or_else(|| {
                            OptimError::InvalidState(format!("参数`{key}`缺少累积张量`{name}`"))
                        })?;
                        if tensor.shape() != entry.shape.as_slice() {
                            return Err(OptimError::ShapeMismatch {
                                key: format!("{key}.{name}"),
                                expected: entry.shape.clone(),
                                got: tensor.shape().to_vec(),
                            });
                        }
                        tensors.push(tensor);
                    }
                    let slots = S::from_tensors(tensors).ok_or_else(|| {
                        OptimError::InvalidState(format!("参数`{key}`的累积张量个数不符"))
                    })?;
                    entries.insert(
                        key,
                        Entry {
                            shape: entry.shape,
                            slots,
                        },
                    );
                }
                Some(entries)
            }
        };
        log::debug!(
            "{optimizer}: 载入状态快照，时间步{}，{}个参数",
            state.step,
            entries.as_ref().map_or(0, BTreeMap::len)
        );
        self.entries = entries;
        self.step = state.step;
        Ok(())
    }
}

/// 返回 (在`expected`中但不在`actual`中的键, 在`actual`中但不在`expected`中的键)
///
/// 两个输入都须已按升序排列（`BTreeMap`的键天然满足），单次归并遍历即可得出结果。
fn diff_keys<'a, 'b>(
    expected: impl Iterator<Item = &'a str>,
    actual: impl Iterator<Item = &'b str>,
) -> (Vec<String>, Vec<String>) {
    let mut expected = expected.peekable();
    let mut actual = actual.peekable();
    let mut missing = Vec::new();
    let mut unexpected = Vec::new();
    loop {
        match (expected.peek().copied(), actual.peek().copied()) {
            (Some(e), Some(a)) => match e.cmp(a) {
                Ordering::Less => {
                    missing.push(e.to_string());
                    expected.next();
                }
                Ordering::Greater => {
                    unexpected.push(a.to_string());
                    actual.next();
                }
                Ordering::Equal => {
                    expected.next();
                    actual.next();
                }
            },
            (Some(_), None) => {
                missing.extend(expected.by_ref().map(str::to_string));
                break;
            }
            (None, Some(_)) => {
                unexpected.extend(actual.by_ref().map(str::to_string));
                break;
            }
            (None, None) => break,
        }
    }
    (missing, unexpected)
}

/// 单个参数的状态快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateEntry {
    /// 首次更新时记录的参数形状
    pub shape: Vec<usize>,
    /// 累积张量名（如`m`、`v`）到张量的映射
    pub slots: BTreeMap<String, Tensor>,
}

/// 优化器的状态快照：时间步 + 参数键到累积张量的映射
///
/// `entries`为`None`表示优化器尚未执行过`update`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerState {
    pub step: u64,
    pub entries: Option<BTreeMap<String, StateEntry>>,
}

// 保存和加载状态快照
impl OptimizerState {
    /// 以二进制形式（bincode）写入本地文件
    pub fn save(&self, file: &mut File) -> Result<(), OptimError> {
        let serialized_data = bincode::serialize(self)?;
        file.write_all(&serialized_data)?;
        Ok(())
    }

    /// 从本地文件加载二进制形式的状态快照
    pub fn load(file: &mut File) -> Result<Self, OptimError> {
        let mut serialized_data = Vec::new();
        file.read_to_end(&mut serialized_data)?;
        Ok(bincode::deserialize(&serialized_data)?)
    }

    pub fn to_json(&self) -> Result<String, OptimError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, OptimError> {
        Ok(serde_json::from_str(json)?)
    }
}
