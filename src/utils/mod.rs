/*
 * @Author       : 老董
 * @Date         : 2026-10-18
 * @LastEditors  : 老董
 * @LastEditTime : 2026-10-18
 * @Description  : 常用接口模块
 */

//! # 常用接口模块
//!
//! 本模块提供一些单元测试中常用的断言宏
